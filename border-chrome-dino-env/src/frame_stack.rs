//! Buffer of the most recent frames.
use crate::{DinoEnvError, Frame, FRAME_HEIGHT, FRAME_WIDTH, N_STACK};
use ndarray::Array4;

/// A ring buffer of the last [`N_STACK`] frames.
///
/// The buffer is either empty or holds exactly [`N_STACK`] frames. The first frame
/// pushed into an empty buffer is replicated to fill all slots.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameStack {
    /// No frame since construction or the last [`FrameStack::clear`].
    Empty,

    /// `frames[head]` is the oldest frame.
    Filled {
        /// Frames in the ring.
        frames: [Frame; N_STACK],

        /// Index of the oldest frame.
        head: usize,
    },
}

impl Default for FrameStack {
    fn default() -> Self {
        Self::Empty
    }
}

impl FrameStack {
    /// Drops all frames.
    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    /// Returns `true` if no frame has been pushed since the last clear.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the number of frames, either 0 or [`N_STACK`].
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Filled { .. } => N_STACK,
        }
    }

    /// Pushes a frame, dropping the oldest one, and returns the stacked frames.
    ///
    /// Frames other than [`FRAME_WIDTH`]x[`FRAME_HEIGHT`] are rejected and leave
    /// the buffer unchanged.
    pub fn push(&mut self, frame: Frame) -> Result<Array4<u8>, DinoEnvError> {
        if frame.dimensions() != (FRAME_WIDTH, FRAME_HEIGHT) {
            return Err(DinoEnvError::FrameShape {
                expected: (FRAME_WIDTH, FRAME_HEIGHT),
                actual: frame.dimensions(),
            });
        }

        match self {
            Self::Empty => {
                *self = Self::Filled {
                    frames: std::array::from_fn(|_| frame.clone()),
                    head: 0,
                };
            }
            Self::Filled { frames, head } => {
                frames[*head] = frame;
                *head = (*head + 1) % N_STACK;
            }
        }
        Ok(self.stack())
    }

    /// Iterates over the frames from the oldest to the newest.
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        let (frames, head) = match self {
            Self::Empty => (None, 0),
            Self::Filled { frames, head } => (Some(frames), *head),
        };
        frames
            .into_iter()
            .flat_map(move |frames| (0..N_STACK).map(move |i| &frames[(head + i) % N_STACK]))
    }

    /// Returns the newest frame.
    pub fn newest(&self) -> Option<&Frame> {
        self.iter().last()
    }

    /// Stacks the frames along the last axis into an array of shape `(1, 80, 80, 4)`.
    ///
    /// An empty buffer gives an array of zeros.
    pub fn stack(&self) -> Array4<u8> {
        let (h, w) = (FRAME_HEIGHT as usize, FRAME_WIDTH as usize);
        let mut arr = Array4::<u8>::zeros((1, h, w, N_STACK));
        for (k, frame) in self.iter().enumerate() {
            for (x, y, p) in frame.enumerate_pixels() {
                arr[[0, y as usize, x as usize, k]] = p[0];
            }
        }
        arr
    }
}
