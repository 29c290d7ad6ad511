//! Feed-forward network with one hidden layer
//!
//! The network maps a [`PixelVector`] to `num_outputs` sigmoid activations,
//! read as the bits of a character code, most significant first. It is
//! trained one example at a time by plain backpropagation with no learning
//! rate.
//!
//! # Layout
//!
//! ```text
//! input[j] --input_weights[j][i]--> hidden[i] --output_weights[i][k]--> output[k]
//! ```
//!
//! Activations are never stored in the network: [`Network::forward`]
//! returns them, so recognition only needs `&self`.

use std::fmt;

use crate::codec::{self, MAX_CODE_BITS};
use crate::tile::{TILE_TARGET_HEIGHT, TILE_TARGET_WIDTH, Tile};
use crate::vector::PixelVector;
use crate::{RecogError, RecogResult};
use glyphnet_core::Pix;
use rand::Rng;

/// Number of output units in the default configuration, one byte of code.
pub const NUM_OUTPUTS: usize = 8;

/// Logistic activation `1 / (1 + e^-x)`.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Options for building a network
#[derive(Debug, Clone)]
pub struct NetworkOptions {
    /// Width of the tiles the network accepts (default: 12)
    pub tile_width: u32,

    /// Height of the tiles the network accepts (default: 12)
    pub tile_height: u32,

    /// Number of output bits (default: 8)
    pub num_outputs: usize,

    /// Number of hidden units (default: inputs + outputs)
    pub hidden_count: Option<usize>,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            tile_width: TILE_TARGET_WIDTH,
            tile_height: TILE_TARGET_HEIGHT,
            num_outputs: NUM_OUTPUTS,
            hidden_count: None,
        }
    }
}

impl NetworkOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accepted tile size
    pub fn with_tile_size(mut self, width: u32, height: u32) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    /// Set the number of output bits
    pub fn with_num_outputs(mut self, num_outputs: usize) -> Self {
        self.num_outputs = num_outputs;
        self
    }

    /// Set the number of hidden units
    pub fn with_hidden_count(mut self, hidden_count: usize) -> Self {
        self.hidden_count = Some(hidden_count);
        self
    }

    /// Number of inputs implied by the tile size.
    pub fn num_inputs(&self) -> usize {
        self.tile_width as usize * self.tile_height as usize
    }

    /// Number of hidden units, resolving the default.
    pub fn resolved_hidden_count(&self) -> usize {
        self.hidden_count
            .unwrap_or_else(|| self.num_inputs() + self.num_outputs)
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(RecogError::InvalidParameter(format!(
                "tile size must be positive, got {}x{}",
                self.tile_width, self.tile_height
            )));
        }
        if !(1..=MAX_CODE_BITS).contains(&self.num_outputs) {
            return Err(RecogError::InvalidParameter(format!(
                "num_outputs must be in 1..={MAX_CODE_BITS}, got {}",
                self.num_outputs
            )));
        }
        if self.hidden_count == Some(0) {
            return Err(RecogError::InvalidParameter(
                "hidden_count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Activations from one forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Activations {
    hidden: Vec<f64>,
    output: Vec<f64>,
}

impl Activations {
    /// Hidden layer outputs.
    pub fn hidden(&self) -> &[f64] {
        &self.hidden
    }

    /// Output layer values, one per code bit.
    pub fn output(&self) -> &[f64] {
        &self.output
    }
}

/// Single-character recognizer
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub(crate) tile_width: u32,
    pub(crate) tile_height: u32,
    pub(crate) num_outputs: usize,
    pub(crate) hidden_count: usize,
    /// `num_inputs x hidden_count`
    pub(crate) input_weights: Vec<Vec<f64>>,
    /// `hidden_count x num_outputs`
    pub(crate) output_weights: Vec<Vec<f64>>,
}

impl Network {
    /// Create a network with weights drawn from the thread RNG.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if the options are invalid.
    pub fn new(options: &NetworkOptions) -> RecogResult<Self> {
        Self::with_rng(options, &mut rand::rng())
    }

    /// Create a network with weights drawn from `rng`.
    ///
    /// Every weight is `uniform[0, 1) / (fan_in * fan_out)` for its layer,
    /// so the total weight of a layer is below one.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if the options are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphnet_recog::{Network, NetworkOptions};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let options = NetworkOptions::default();
    /// let a = Network::with_rng(&options, &mut StdRng::seed_from_u64(7)).unwrap();
    /// let b = Network::with_rng(&options, &mut StdRng::seed_from_u64(7)).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.num_inputs(), 144);
    /// assert_eq!(a.hidden_count(), 152);
    /// ```
    pub fn with_rng<R: Rng>(options: &NetworkOptions, rng: &mut R) -> RecogResult<Self> {
        options.validate()?;

        let num_inputs = options.num_inputs();
        let num_outputs = options.num_outputs;
        let hidden_count = options.resolved_hidden_count();

        let input_scale = (num_inputs * hidden_count) as f64;
        let input_weights = (0..num_inputs)
            .map(|_| {
                (0..hidden_count)
                    .map(|_| rng.random::<f64>() / input_scale)
                    .collect()
            })
            .collect();

        let output_scale = (hidden_count * num_outputs) as f64;
        let output_weights = (0..hidden_count)
            .map(|_| {
                (0..num_outputs)
                    .map(|_| rng.random::<f64>() / output_scale)
                    .collect()
            })
            .collect();

        let network = Self {
            tile_width: options.tile_width,
            tile_height: options.tile_height,
            num_outputs,
            hidden_count,
            input_weights,
            output_weights,
        };
        log::debug!("created network: {network}");
        Ok(network)
    }

    /// Number of input units, one per tile pixel.
    pub fn num_inputs(&self) -> usize {
        self.input_weights.len()
    }

    /// Number of output units.
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// Number of hidden units.
    pub fn hidden_count(&self) -> usize {
        self.hidden_count
    }

    /// Width of the tiles the network accepts.
    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Height of the tiles the network accepts.
    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Input to hidden weights, indexed `[input][hidden]`.
    pub fn input_weights(&self) -> &[Vec<f64>] {
        &self.input_weights
    }

    /// Hidden to output weights, indexed `[hidden][output]`.
    pub fn output_weights(&self) -> &[Vec<f64>] {
        &self.output_weights
    }

    /// Flatten a normalized tile image into an input vector.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::TileSizeMismatch`] if the image is not exactly
    /// the network's tile size.
    pub fn input_from_pix(&self, pix: &Pix) -> RecogResult<PixelVector> {
        let actual = (pix.width(), pix.height());
        let expected = (self.tile_width, self.tile_height);
        if actual != expected {
            return Err(RecogError::TileSizeMismatch { expected, actual });
        }
        Ok(PixelVector::from_source(pix))
    }

    fn check_len(&self, input: &PixelVector) -> RecogResult<()> {
        if input.len() != self.num_inputs() {
            return Err(RecogError::VectorLengthMismatch {
                expected: self.num_inputs(),
                actual: input.len(),
            });
        }
        Ok(())
    }

    /// Propagate an input vector through both layers.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::VectorLengthMismatch`] if the vector length is
    /// not [`num_inputs`](Self::num_inputs).
    pub fn forward(&self, input: &PixelVector) -> RecogResult<Activations> {
        self.check_len(input)?;

        let mut hidden = vec![0.0; self.hidden_count];
        for (&x, row) in input.as_slice().iter().zip(&self.input_weights) {
            if x == 0 {
                continue;
            }
            let x = f64::from(x);
            for (sum, &w) in hidden.iter_mut().zip(row) {
                *sum += x * w;
            }
        }
        hidden.iter_mut().for_each(|h| *h = sigmoid(*h));

        let mut output = vec![0.0; self.num_outputs];
        for (&h, row) in hidden.iter().zip(&self.output_weights) {
            for (sum, &w) in output.iter_mut().zip(row) {
                *sum += h * w;
            }
        }
        output.iter_mut().for_each(|o| *o = sigmoid(*o));

        Ok(Activations { hidden, output })
    }

    /// Take one backpropagation step toward `target`.
    ///
    /// The target is encoded as `num_outputs` bits of its code point; higher
    /// bits are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::VectorLengthMismatch`] if the vector length is
    /// not [`num_inputs`](Self::num_inputs).
    pub fn train(&mut self, input: &PixelVector, target: char) -> RecogResult<()> {
        let act = self.forward(input)?;
        let expected = codec::char_to_bits(target, self.num_outputs);

        let output_errors: Vec<f64> = act
            .output
            .iter()
            .zip(&expected)
            .map(|(&o, &t)| (f64::from(t) - o) * o * (1.0 - o))
            .collect();

        // uses the output weights from before this step
        let hidden_errors: Vec<f64> = act
            .hidden
            .iter()
            .zip(&self.output_weights)
            .map(|(&h, row)| {
                let back: f64 = output_errors.iter().zip(row).map(|(e, w)| e * w).sum();
                h * (1.0 - h) * back
            })
            .collect();

        for (&h, row) in act.hidden.iter().zip(self.output_weights.iter_mut()) {
            for (w, e) in row.iter_mut().zip(&output_errors) {
                *w += e * h;
            }
        }

        for (&x, row) in input.as_slice().iter().zip(self.input_weights.iter_mut()) {
            if x == 0 {
                continue;
            }
            let x = f64::from(x);
            for (w, e) in row.iter_mut().zip(&hidden_errors) {
                *w += e * x;
            }
        }
        Ok(())
    }

    /// Quantized output bits of a forward pass, MSB first.
    pub fn bitstring(&self, activations: &Activations) -> String {
        codec::bitstring(activations.output())
    }

    /// Recognize the character encoded by the network's output.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::VectorLengthMismatch`] for a wrongly sized
    /// vector, or [`RecogError::Decode`] if the output bits do not name a
    /// character.
    pub fn recognize(&self, input: &PixelVector) -> RecogResult<char> {
        let act = self.forward(input)?;
        let bits = self.bitstring(&act);
        log::debug!("recognized bits {bits}");
        codec::parse_bitstring(&bits).inspect_err(|e| log::error!("{e}"))
    }

    /// Train on a labelled tile.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::UnlabelledTile`] if the tile has no letter, or
    /// [`RecogError::TileSizeMismatch`] if its reduced image does not match
    /// the network.
    pub fn train_tile(&mut self, tile: &Tile) -> RecogResult<()> {
        let letter = tile.letter().ok_or(RecogError::UnlabelledTile)?;
        let input = self.input_from_pix(tile.reduced())?;
        self.train(&input, letter)
    }

    /// Recognize a tile.
    ///
    /// # Errors
    ///
    /// Same as [`input_from_pix`](Self::input_from_pix) and
    /// [`recognize`](Self::recognize).
    pub fn recognize_tile(&self, tile: &Tile) -> RecogResult<char> {
        let input = self.input_from_pix(tile.reduced())?;
        self.recognize(&input)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NumInputs: {}, NumOutputs: {}, HiddenCount: {}",
            self.num_inputs(),
            self.num_outputs,
            self.hidden_count
        )
    }
}
