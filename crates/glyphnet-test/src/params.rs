//! Regression test parameters and operations

use glyphnet_core::Pix;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare and report failures (default)
    #[default]
    Compare,
    /// Compare, and also print every compared value and rendered tile
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the index of
/// the current comparison, the mode, and every failure seen so far.
/// Failures do not stop the test; [`RegParams::cleanup`] reports them all.
pub struct RegParams {
    /// Name of the test (e.g., "bbox")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if self.display() {
            eprintln!(
                "  [{:02}] expected = {}, actual = {}",
                self.index, expected, actual
            );
        }

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two slices of floating-point values element by element
    ///
    /// Returns `true` if the lengths match and every pair is within `delta`.
    pub fn compare_slices(&mut self, expected: &[f64], actual: &[f64], delta: f64) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            let msg = format!(
                "Failure in {}_reg: slice comparison for index {} - lengths {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            );
            self.fail(msg);
            return false;
        }

        for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
            if (e - a).abs() > delta {
                let msg = format!(
                    "Failure in {}_reg: slice comparison for index {} - element {}: \
                     expected = {}, actual = {}, allowed delta = {}",
                    self.test_name, self.index, i, e, a, delta
                );
                self.fail(msg);
                return false;
            }
        }

        true
    }

    /// Compare two Pix images for exact equality
    ///
    /// Returns `true` if the images have the same size, depth, and pixels.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        if !pix1.sizes_equal(pix2) || pix1.depth() != pix2.depth() {
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                pix1.width(),
                pix1.height(),
                pix2.width(),
                pix2.height()
            );
            self.fail(msg);
            return false;
        }

        for y in 0..pix1.height() {
            for x in 0..pix1.width() {
                if pix1.get_pixel(x, y) != pix2.get_pixel(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: pix comparison for index {} - \
                         pixel mismatch at ({}, {})",
                        self.test_name, self.index, x, y
                    );
                    self.fail(msg);
                    return false;
                }
            }
        }

        if self.display() {
            eprintln!("  [{:02}] pix\n{}", self.index, pix1.to_ascii());
        }

        true
    }

    /// Compare two strings for exact equality
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 expected = {:?}\n\
                 actual   = {:?}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphnet_core::PixelDepth;

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.index(), 3);
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_slices() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_slices(&[1.0, 2.0], &[1.0, 2.0 + 1e-12], 1e-9));
        assert!(!rp.compare_slices(&[1.0], &[1.0, 2.0], 0.0));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_pix() {
        let mut rp = RegParams::new("test");
        let a = Pix::new(3, 3, PixelDepth::Bit1).unwrap();
        let mut pm = a.to_mut();
        pm.set_pixel(1, 1, 1).unwrap();
        let b: Pix = pm.into();
        assert!(rp.compare_pix(&a, &a.clone()));
        assert!(!rp.compare_pix(&a, &b));
        let c = Pix::new(3, 4, PixelDepth::Bit1).unwrap();
        assert!(!rp.compare_pix(&a, &c));
    }

    #[test]
    fn test_compare_strings() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_strings("abc", "abc"));
        assert!(!rp.compare_strings("abc", "abd"));
    }
}
