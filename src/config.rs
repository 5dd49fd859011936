//! Fixed layout constants for the customizer.
//!
//! Nothing here is runtime-configurable from the page. `CustomizerConfig`
//! exists so the compositor and the host binary read the same values, and so
//! tests can shrink the region onto small synthetic base images.

use crate::error::ConfigError;
use crate::pattern::StyleTable;

pub const BAR_WIDTH: u32 = 500;
pub const BAR_HEIGHT: u32 = 37;
pub const BAR_X: u32 = 710;
pub const BAR_Y: u32 = 654;

/// Name the browser saves the composite under.
pub const DOWNLOAD_FILE_NAME: &str = "rpi_random_bar.png";

/// Logo asset path, relative to the served page.
pub const BASE_ASSET_URL: &str = "assets/rpi.png";

/// Where a generated bar lands on the base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarRegion {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl Default for BarRegion {
    fn default() -> Self {
        Self {
            width: BAR_WIDTH,
            height: BAR_HEIGHT,
            x: BAR_X,
            y: BAR_Y,
        }
    }
}

impl BarRegion {
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let right = self.x as u64 + self.width as u64;
        let bottom = self.y as u64 + self.height as u64;
        right <= width as u64 && bottom <= height as u64
    }

    pub fn check_within(&self, width: u32, height: u32) -> Result<(), ConfigError> {
        if self.fits_within(width, height) {
            return Ok(());
        }
        Err(ConfigError::RegionOutOfBounds {
            width: self.width,
            height: self.height,
            x: self.x,
            y: self.y,
            base_width: width,
            base_height: height,
        })
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u64) < self.x as u64 + self.width as u64
            && (y as u64) < self.y as u64 + self.height as u64
    }
}

#[derive(Debug, Clone)]
pub struct CustomizerConfig {
    pub region: BarRegion,
    pub asset_url: String,
    pub download_file_name: String,
    /// Weights used for every non-initial render.
    pub styles: StyleTable,
}

impl Default for CustomizerConfig {
    fn default() -> Self {
        Self {
            region: BarRegion::default(),
            asset_url: BASE_ASSET_URL.to_string(),
            download_file_name: DOWNLOAD_FILE_NAME.to_string(),
            styles: StyleTable::uniform(),
        }
    }
}

impl CustomizerConfig {
    /// Checks the region against the natural size of the loaded base image.
    pub fn validate_for(&self, width: u32, height: u32) -> Result<(), ConfigError> {
        self.region.check_within(width, height)
    }
}
