//! Stacks generated bars onto the base logo and keeps the latest composite.
//!
//! The base image arrives asynchronously. Until it does, render requests are
//! queued; once it is ready they replay in arrival order, so the last
//! request always produces the published composite.

use rand::Rng;

use crate::config::{BarRegion, CustomizerConfig};
use crate::encode::{encode_png, png_data_url};
use crate::error::CompositorError;
use crate::pattern::{self, PatternRequest};
use crate::surface::PixelBuffer;

/// Load state of the base logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetState {
    Pending,
    Ready(PixelBuffer),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The base is still loading; the request will run once it arrives.
    Queued,
    /// Rendered synchronously; carries the composite's sequence number.
    Rendered(u64),
}

/// One finished base+bar image.
#[derive(Debug, Clone)]
pub struct Composite {
    image: PixelBuffer,
    data_url: String,
    request: PatternRequest,
    bar_applied: bool,
    sequence: u64,
}

impl Composite {
    pub fn image(&self) -> &PixelBuffer {
        &self.image
    }

    /// PNG data URL for the preview element.
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn request(&self) -> PatternRequest {
        self.request
    }

    /// False when the bar surface could not be created and the composite is
    /// the bare base image.
    pub fn bar_applied(&self) -> bool {
        self.bar_applied
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// A file ready to hand to the browser's save mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Copies `bar` over `base` at the region offset. The bar is opaque, so its
/// pixels replace the base pixels outright.
pub fn composite(
    base: &PixelBuffer,
    bar: &PixelBuffer,
    region: &BarRegion,
) -> Result<PixelBuffer, CompositorError> {
    let placed = BarRegion {
        width: bar.width(),
        height: bar.height(),
        ..*region
    };
    placed.check_within(base.width(), base.height())?;

    let mut out = base.clone();
    out.blit(bar, region.x, region.y);
    Ok(out)
}

pub struct Compositor<R> {
    config: CustomizerConfig,
    rng: R,
    asset: AssetState,
    queue: Vec<bool>,
    current: Option<Composite>,
    next_sequence: u64,
}

impl<R: Rng> Compositor<R> {
    pub fn new(config: CustomizerConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            asset: AssetState::Pending,
            queue: Vec::new(),
            current: None,
            next_sequence: 1,
        }
    }

    pub fn config(&self) -> &CustomizerConfig {
        &self.config
    }

    pub fn asset(&self) -> &AssetState {
        &self.asset
    }

    pub fn pending_requests(&self) -> usize {
        self.queue.len()
    }

    pub fn current(&self) -> Option<&Composite> {
        self.current.as_ref()
    }

    pub fn is_rendered(&self) -> bool {
        self.current.is_some()
    }

    pub fn preview_data_url(&self) -> Option<&str> {
        self.current.as_ref().map(Composite::data_url)
    }

    /// Base image finished loading. Replays every queued render; one that
    /// fails is logged and skipped. Returns how many succeeded.
    pub fn asset_loaded(&mut self, base: PixelBuffer) -> Result<usize, CompositorError> {
        if let Err(err) = self.config.validate_for(base.width(), base.height()) {
            log::error!("base image rejected: {err}");
            self.asset = AssetState::Failed(err.to_string());
            self.queue.clear();
            return Err(err.into());
        }

        log::info!("base image ready ({}x{})", base.width(), base.height());
        self.asset = AssetState::Ready(base);

        Ok(self.replay_queue())
    }

    fn replay_queue(&mut self) -> usize {
        let mut rendered = 0;
        for force_white in std::mem::take(&mut self.queue) {
            match self.render_now(force_white) {
                Ok(_) => rendered += 1,
                Err(err) => log::warn!("queued render (force_white={force_white}) failed: {err}"),
            }
        }
        rendered
    }

    /// Base image failed to load; later renders report it instead of stalling.
    pub fn asset_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::error!("base image failed to load: {reason}");
        self.asset = AssetState::Failed(reason);
        self.queue.clear();
    }

    /// Renders now if the base is ready, otherwise queues the request.
    pub fn request_render(&mut self, force_white: bool) -> Result<RenderOutcome, CompositorError> {
        match self.asset {
            AssetState::Pending => {
                self.queue.push(force_white);
                log::debug!("render queued behind base image ({} waiting)", self.queue.len());
                Ok(RenderOutcome::Queued)
            }
            AssetState::Failed(ref reason) => {
                Err(CompositorError::AssetUnavailable(reason.clone()))
            }
            AssetState::Ready(_) => self.render_now(force_white).map(RenderOutcome::Rendered),
        }
    }

    fn render_now(&mut self, force_white: bool) -> Result<u64, CompositorError> {
        let AssetState::Ready(base) = &self.asset else {
            return Err(CompositorError::AssetUnavailable(
                "base image not loaded".to_string(),
            ));
        };

        let request = if force_white {
            PatternRequest::SolidWhite
        } else {
            PatternRequest::Style(self.config.styles.choose(&mut self.rng))
        };
        let region = self.config.region;

        let (image, bar_applied) =
            match pattern::generate(request, region.width, region.height, &mut self.rng) {
                Ok(bar) => (composite(base, &bar, &region)?, true),
                Err(err) => {
                    log::warn!("{err}; publishing base image without a bar");
                    (base.clone(), false)
                }
            };

        let data_url = png_data_url(&encode_png(&image)?);
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        log::info!("rendered composite #{sequence} with {request} bar");
        self.current = Some(Composite {
            image,
            data_url,
            request,
            bar_applied,
            sequence,
        });
        Ok(sequence)
    }

    /// PNG bytes of the latest composite under the configured file name.
    pub fn download(&self) -> Result<Download, CompositorError> {
        let current = self.current.as_ref().ok_or(CompositorError::NotRendered)?;
        let bytes = encode_png(&current.image)?;
        log::info!(
            "download {} ({} bytes, composite #{})",
            self.config.download_file_name,
            bytes.len(),
            current.sequence
        );
        Ok(Download {
            file_name: self.config.download_file_name.clone(),
            bytes,
        })
    }
}
