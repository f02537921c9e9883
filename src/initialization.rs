use crate::error::InitError;
use crate::math::Rng;
use crate::matrix::Matrix;

pub trait WeightInitializer {
    fn randomize_matrix<const M: usize, const N: usize>(
        &self,
        matrix: &mut Matrix<M, N>,
        rng: &mut Rng,
    ) -> Result<(), InitError>;
}

pub struct Uniform {
    lower: f32,
    upper: f32,
}

impl Uniform {
    pub const fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Self::new(-0.5, 0.5)
    }
}

impl WeightInitializer for Uniform {
    fn randomize_matrix<const M: usize, const N: usize>(
        &self,
        matrix: &mut Matrix<M, N>,
        rng: &mut Rng,
    ) -> Result<(), InitError> {
        if self.lower > self.upper {
            return Err(InitError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }

        for row in 0..M {
            for col in 0..N {
                matrix[row][col] = rng.next_f32_range(self.lower, self.upper);
            }
        }

        Ok(())
    }
}

/// Nguyen-Widrow initialization: a uniform random fill rescaled so the
/// whole-matrix norm equals `0.7 * fan_out^(1 / fan_in)`, spreading the
/// active regions of the neurons evenly over the input space.
pub struct NguyenWidrow {
    lower: f32,
    upper: f32,
}

impl NguyenWidrow {
    pub const fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }
}

impl Default for NguyenWidrow {
    fn default() -> Self {
        Self::new(-0.5, 0.5)
    }
}

impl WeightInitializer for NguyenWidrow {
    fn randomize_matrix<const M: usize, const N: usize>(
        &self,
        matrix: &mut Matrix<M, N>,
        rng: &mut Rng,
    ) -> Result<(), InitError> {
        if M == 0 || N == 0 {
            return Err(InitError::InvalidDimension { rows: M, cols: N });
        }

        Uniform::new(self.lower, self.upper).randomize_matrix(matrix, rng)?;

        // The exponent is evaluated in floating point; integer division
        // would truncate 1 / M to zero for any M > 1.
        let beta = 0.7 * (N as f64).powf(1.0 / M as f64);

        let norm = f64::from(matrix.frobenius_norm());
        if norm == 0.0 {
            return Err(InitError::DegenerateNorm);
        }

        *matrix *= (beta / norm) as f32;

        Ok(())
    }
}
