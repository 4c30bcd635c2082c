/// An RGBA8 pixel buffer as returned by `getImageData`.
#[derive(Clone, Debug)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

/// One grid sample that passed the alpha test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub x: usize,
    pub y: usize,
    pub rgb: [u8; 3],
}

impl Raster {
    /// Wraps a buffer, returning `None` when its length does not match the dimensions.
    pub fn new(width: usize, height: usize, rgba: Vec<u8>) -> Option<Self> {
        (rgba.len() == width * height * 4).then_some(Self {
            width,
            height,
            rgba,
        })
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [
            self.rgba[i],
            self.rgba[i + 1],
            self.rgba[i + 2],
            self.rgba[i + 3],
        ]
    }

    /// Row-major walk over the `stride` grid keeping pixels whose alpha is
    /// strictly greater than `alpha_threshold`.
    pub fn sample_opaque(&self, stride: usize, alpha_threshold: u8) -> Vec<Sample> {
        let stride = stride.max(1);
        let mut out = Vec::new();
        for y in (0..self.height).step_by(stride) {
            for x in (0..self.width).step_by(stride) {
                let [r, g, b, a] = self.pixel(x, y);
                if a > alpha_threshold {
                    out.push(Sample { x, y, rgb: [r, g, b] });
                }
            }
        }
        out
    }
}
