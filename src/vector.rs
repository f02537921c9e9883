use bytemuck::Zeroable;
use std::ops::{Deref, Index, IndexMut, MulAssign};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable)]
pub struct Vector<const N: usize> {
    inner: [f32; N],
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl<const N: usize> MulAssign<f32> for Vector<N> {
    fn mul_assign(&mut self, rhs: f32) {
        for x in self.inner.iter_mut() {
            *x *= rhs;
        }
    }
}

impl<const N: usize> Deref for Vector<N> {
    type Target = [f32; N];
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<const N: usize> Vector<N> {
    pub const fn from_raw(inner: [f32; N]) -> Self {
        Self { inner }
    }

    pub const fn zeroed() -> Self {
        Self::from_raw([0.0; N])
    }

    pub fn from_fn<F: FnMut(usize) -> f32>(mut f: F) -> Self {
        let mut res = Self::zeroed();

        for i in 0..N {
            res.inner[i] = f(i);
        }

        res
    }
}
