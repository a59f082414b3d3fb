//! Common test fixtures for surface export tests.

/// Common header geometries for testing.
pub mod header {
    /// Header geometry for testing, independent of the library types.
    #[derive(Debug, Clone, Copy)]
    pub struct HeaderSpec {
        pub ncol: usize,
        pub nrow: usize,
        pub xori: f64,
        pub yori: f64,
        pub xinc: f64,
        pub yinc: f64,
        pub rot: f64,
    }

    impl HeaderSpec {
        /// Returns the total number of grid nodes.
        pub fn size(&self) -> usize {
            self.ncol * self.nrow
        }

        /// Maximum X extent.
        pub fn xmax(&self) -> f64 {
            self.xori + self.ncol.saturating_sub(1) as f64 * self.xinc
        }

        /// Maximum Y extent.
        pub fn ymax(&self) -> f64 {
            self.yori + self.nrow.saturating_sub(1) as f64 * self.yinc
        }
    }

    /// A small unrotated surface on UTM-like coordinates.
    pub const SMALL_UTM: HeaderSpec = HeaderSpec {
        ncol: 5,
        nrow: 4,
        xori: 456000.0,
        yori: 6782000.0,
        xinc: 25.0,
        yinc: 25.0,
        rot: 0.0,
    };

    /// A rotated surface with non-square cells.
    pub const ROTATED: HeaderSpec = HeaderSpec {
        ncol: 7,
        nrow: 3,
        xori: 1000.5,
        yori: 2000.25,
        xinc: 12.5,
        yinc: 40.0,
        rot: 30.0,
    };

    /// Every geometry field zero.
    pub const ZERO_GEOMETRY: HeaderSpec = HeaderSpec {
        ncol: 1,
        nrow: 1,
        xori: 0.0,
        yori: 0.0,
        xinc: 0.0,
        yinc: 0.0,
        rot: 0.0,
    };

    /// Wider than the default line width, to force wrapping inside rows.
    pub const WIDE: HeaderSpec = HeaderSpec {
        ncol: 23,
        nrow: 5,
        xori: -500.0,
        yori: -250.0,
        xinc: 10.0,
        yinc: 10.0,
        rot: 0.0,
    };
}

/// Values with known 4-decimal renderings.
pub mod tokens {
    /// (value, expected token) pairs.
    pub const KNOWN: [(f32, &str); 8] = [
        (0.0, "0.0000"),
        (1.0, "1.0000"),
        (-2.5, "-2.5000"),
        (0.12345, "0.1235"),
        (100.0, "100.0000"),
        (-0.00001, "-0.0000"),
        (1812.75, "1812.7500"),
        (-31.03125, "-31.0312"),
    ];

    /// The token written for undefined samples.
    pub const UNDEFINED: &str = "9999900.0000";
}
