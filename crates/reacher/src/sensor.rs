use physics::Vec3;

/// Fixed-size observation buffer filled by an agent once per step.
///
/// Writes past the declared size are dropped with a warning; a short vector is
/// zero padded by [`VectorSensor::padded`].
#[derive(Clone, Debug)]
pub struct VectorSensor {
    size: usize,
    data: Vec<f32>,
    overflowed: bool,
}

impl VectorSensor {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size, data: Vec::with_capacity(size), overflowed: false }
    }

    /// Declared observation size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of values written since the last reset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn reset(&mut self) {
        self.data.clear();
        self.overflowed = false;
    }

    pub fn add_f32(&mut self, value: f32) {
        if self.data.len() >= self.size {
            if !self.overflowed {
                tracing::warn!(size = self.size, "observation overflow, extra values dropped");
                self.overflowed = true;
            }
            return;
        }
        self.data.push(value);
    }

    pub fn add_vec3(&mut self, v: Vec3) {
        for value in v.to_array() {
            self.add_f32(value);
        }
    }

    /// Quaternion in `x, y, z, w` order.
    pub fn add_quat(&mut self, q: [f32; 4]) {
        for value in q {
            self.add_f32(value);
        }
    }

    pub fn add_bool(&mut self, flag: bool) {
        self.add_f32(if flag { 1.0 } else { 0.0 });
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Observation of exactly [`size`](Self::size) values.
    #[must_use]
    pub fn padded(&self) -> Vec<f32> {
        let mut out = self.data.clone();
        out.resize(self.size, 0.0);
        out
    }
}
