//! Tile normalization
//!
//! Turns an arbitrary-size glyph tile into the fixed-size binary image fed
//! to the network:
//!
//! 1. binarize against a black/white palette
//! 2. find the bounding box of the black ink, expanded by a border
//! 3. crop to the box, unless it is too small relative to the tile
//! 4. resample to the target resolution by nearest neighbor
//!
//! The size guard in step 3 keeps stray specks from being blown up to fill
//! the whole tile.

use crate::vector::PixelVector;
use crate::{RecogError, RecogResult};
use glyphnet_core::{Pix, PixelSource};
use glyphnet_transform::scale_to_size;

/// Default width of a normalized tile.
pub const TILE_TARGET_WIDTH: u32 = 12;

/// Default height of a normalized tile.
pub const TILE_TARGET_HEIGHT: u32 = 12;

/// Default minimum size of the ink box, as a fraction of the tile size,
/// for the box to be used as a crop.
pub const MIN_BOUNDING_BOX_FRACTION: f64 = 0.25;

/// Options for tile normalization
#[derive(Debug, Clone)]
pub struct TileOptions {
    /// Width of the reduced image (default: 12)
    pub target_width: u32,

    /// Height of the reduced image (default: 12)
    pub target_height: u32,

    /// Margin added around the ink bounding box (default: 0)
    pub border: u32,

    /// Minimum box size relative to the tile, per dimension (default: 0.25)
    pub min_box_fraction: f64,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            target_width: TILE_TARGET_WIDTH,
            target_height: TILE_TARGET_HEIGHT,
            border: 0,
            min_box_fraction: MIN_BOUNDING_BOX_FRACTION,
        }
    }
}

impl TileOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reduced image size
    pub fn with_target_size(mut self, width: u32, height: u32) -> Self {
        self.target_width = width;
        self.target_height = height;
        self
    }

    /// Set the bounding box border
    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Set the minimum box fraction
    pub fn with_min_box_fraction(mut self, fraction: f64) -> Self {
        self.min_box_fraction = fraction;
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if self.target_width == 0 || self.target_height == 0 {
            return Err(RecogError::InvalidParameter(format!(
                "target size must be positive, got {}x{}",
                self.target_width, self.target_height
            )));
        }
        if !(0.0..=1.0).contains(&self.min_box_fraction) {
            return Err(RecogError::InvalidParameter(format!(
                "min_box_fraction must be in [0, 1], got {}",
                self.min_box_fraction
            )));
        }
        Ok(())
    }
}

/// A glyph tile and the images produced while normalizing it.
///
/// All images are computed once at construction; a `Tile` never changes
/// afterwards.
#[derive(Debug, Clone)]
pub struct Tile {
    letter: Option<char>,
    original: Pix,
    bounded: Pix,
    reduced: Pix,
    cropped: bool,
}

impl Tile {
    /// Normalize `source` with default options.
    ///
    /// `letter` is the known character for a training tile, or `None` for a
    /// tile to be recognized.
    ///
    /// # Errors
    ///
    /// Returns an error if the source has empty bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphnet_core::{Pix, PixelDepth};
    /// use glyphnet_recog::Tile;
    ///
    /// let src = Pix::new(40, 30, PixelDepth::Bit8).unwrap();
    /// let tile = Tile::new(Some('A'), &src).unwrap();
    /// assert_eq!((tile.reduced().width(), tile.reduced().height()), (12, 12));
    /// assert_eq!(tile.pixels().len(), 144);
    /// ```
    pub fn new(letter: Option<char>, source: &impl PixelSource) -> RecogResult<Self> {
        Self::with_options(letter, source, &TileOptions::default())
    }

    /// Normalize `source` with the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the source has empty
    /// bounds.
    pub fn with_options(
        letter: Option<char>,
        source: &impl PixelSource,
        options: &TileOptions,
    ) -> RecogResult<Self> {
        options.validate()?;

        let original = Pix::from_source(source)?;
        let binary = Pix::binarize(&original)?;
        let bbox = binary.bounding_box(options.border)?;

        let cropped = bbox.covers_fraction_of(&binary.bounds(), options.min_box_fraction);
        let bounded = if cropped {
            log::debug!(
                "cropping {}x{} tile to {:?}",
                binary.width(),
                binary.height(),
                bbox
            );
            binary.clip_rectangle(&bbox)?
        } else {
            log::debug!(
                "ink box {:?} too small for {}x{} tile, not cropping",
                bbox,
                binary.width(),
                binary.height()
            );
            binary
        };

        let reduced = scale_to_size(&bounded, options.target_width, options.target_height)?;
        log::trace!("reduced tile {:?}:\n{}", letter, reduced.to_ascii());

        Ok(Self {
            letter,
            original,
            bounded,
            reduced,
            cropped,
        })
    }

    /// The known character, if this is a training tile.
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// The source image as given, in 32 bpp.
    pub fn original(&self) -> &Pix {
        &self.original
    }

    /// The binarized image, cropped to the ink box when it was large enough.
    pub fn bounded(&self) -> &Pix {
        &self.bounded
    }

    /// The binarized image resampled to the target size.
    pub fn reduced(&self) -> &Pix {
        &self.reduced
    }

    /// Whether the ink box was used as a crop.
    pub fn was_cropped(&self) -> bool {
        self.cropped
    }

    /// The reduced image flattened to a network input.
    pub fn pixels(&self) -> PixelVector {
        PixelVector::from_source(&self.reduced)
    }
}
