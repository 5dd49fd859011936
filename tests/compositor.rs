#![cfg(not(target_arch = "wasm32"))]

use logo_bar::config::{BAR_HEIGHT, BAR_WIDTH, BAR_X, BAR_Y, DOWNLOAD_FILE_NAME};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use logo_bar::encode::decode_png;
use logo_bar::{
    composite, AssetState, BarColor, BarRegion, CompositorError, Compositor, ConfigError,
    CustomizerConfig, PatternRequest, PatternStyle, PixelBuffer, RenderOutcome, StyleTable,
    ACCENT_RED, WHITE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A base image where every pixel differs from both bar colours.
fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x % 200) as u8, (y % 200) as u8, 90, 255]);
        }
    }
    PixelBuffer::from_rgba(width, height, pixels).unwrap()
}

fn small_config() -> CustomizerConfig {
    CustomizerConfig {
        region: BarRegion {
            width: 20,
            height: 6,
            x: 10,
            y: 30,
        },
        ..CustomizerConfig::default()
    }
}

fn compositor(config: CustomizerConfig, seed: u64) -> Compositor<StdRng> {
    Compositor::new(config, StdRng::seed_from_u64(seed))
}

fn assert_bar_over_base(out: &PixelBuffer, base: &PixelBuffer, region: &BarRegion) {
    assert_eq!((out.width(), out.height()), (base.width(), base.height()));
    for y in 0..base.height() {
        for x in 0..base.width() {
            if region.contains(x, y) {
                let px = out.pixel(x, y);
                assert!(BarColor::from_rgba(px).is_some(), "({x}, {y}) = {px:?}");
            } else {
                assert_eq!(out.pixel(x, y), base.pixel(x, y), "base changed at ({x}, {y})");
            }
        }
    }
}

#[test]
fn initial_white_render_on_full_size_logo() {
    let (w, h) = (1400, 760);
    let base = gradient(w, h);
    let mut c = compositor(CustomizerConfig::default(), 1);

    assert_eq!(c.request_render(true).unwrap(), RenderOutcome::Queued);
    assert_eq!(c.asset_loaded(base.clone()).unwrap(), 1);

    let current = c.current().unwrap();
    assert_eq!(current.request(), PatternRequest::SolidWhite);
    let out = current.image();
    assert_eq!((out.width(), out.height()), (w, h));
    for y in 0..h {
        for x in 0..w {
            let inside = (BAR_X..BAR_X + BAR_WIDTH).contains(&x)
                && (BAR_Y..BAR_Y + BAR_HEIGHT).contains(&y);
            let expected = if inside { WHITE } else { base.pixel(x, y) };
            assert_eq!(out.pixel(x, y), expected, "({x}, {y})");
        }
    }
}

#[test]
fn two_random_renders_are_each_valid() {
    let base = gradient(64, 48);
    let config = small_config();
    let region = config.region;
    let mut c = compositor(config, 2);
    c.asset_loaded(base.clone()).unwrap();

    let first = c.request_render(false).unwrap();
    let a = c.current().unwrap().clone();
    let second = c.request_render(false).unwrap();
    let b = c.current().unwrap().clone();

    assert_eq!(first, RenderOutcome::Rendered(1));
    assert_eq!(second, RenderOutcome::Rendered(2));
    for out in [&a, &b] {
        assert!(matches!(out.request(), PatternRequest::Style(_)));
        assert!(out.bar_applied());
        assert_bar_over_base(out.image(), &base, &region);
    }
}

#[test]
fn every_forced_style_composites_cleanly() {
    let base = gradient(64, 48);
    for style in PatternStyle::ALL {
        let mut config = small_config();
        config.styles = StyleTable::only(style);
        let region = config.region;
        let mut c = compositor(config, 3);
        c.asset_loaded(base.clone()).unwrap();
        c.request_render(false).unwrap();

        let current = c.current().unwrap();
        assert_eq!(current.request(), PatternRequest::Style(style));
        assert_bar_over_base(current.image(), &base, &region);
    }
}

#[test]
fn renders_before_load_replay_in_order() {
    let mut c = compositor(small_config(), 4);
    assert_eq!(c.asset(), &AssetState::Pending);
    assert!(!c.is_rendered());

    c.request_render(true).unwrap();
    c.request_render(false).unwrap();
    c.request_render(false).unwrap();
    assert_eq!(c.pending_requests(), 3);
    assert!(c.current().is_none());

    assert_eq!(c.asset_loaded(gradient(64, 48)).unwrap(), 3);
    assert_eq!(c.pending_requests(), 0);

    // The last queued request wins.
    let current = c.current().unwrap();
    assert_eq!(current.sequence(), 3);
    assert!(matches!(current.request(), PatternRequest::Style(_)));
}

#[test]
fn preview_is_a_png_data_url_of_the_composite() {
    let mut c = compositor(small_config(), 5);
    assert!(c.preview_data_url().is_none());
    c.asset_loaded(gradient(64, 48)).unwrap();
    c.request_render(false).unwrap();

    let url = c.preview_data_url().unwrap();
    let payload = url.strip_prefix("data:image/png;base64,").unwrap();
    let decoded = decode_png(&STANDARD.decode(payload).unwrap()).unwrap();
    assert_eq!(&decoded, c.current().unwrap().image());
}

#[test]
fn download_before_render_is_refused() {
    let mut c = compositor(small_config(), 6);
    assert!(matches!(c.download(), Err(CompositorError::NotRendered)));

    c.asset_loaded(gradient(64, 48)).unwrap();
    assert!(matches!(c.download(), Err(CompositorError::NotRendered)));
}

#[test]
fn download_matches_last_composite() {
    let mut c = compositor(small_config(), 7);
    c.asset_loaded(gradient(64, 48)).unwrap();
    c.request_render(true).unwrap();
    c.request_render(false).unwrap();

    let download = c.download().unwrap();
    assert_eq!(download.file_name, DOWNLOAD_FILE_NAME);
    let decoded = decode_png(&download.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (64, 48));
    assert_eq!(&decoded, c.current().unwrap().image());
}

#[test]
fn failed_asset_reports_instead_of_stalling() {
    let mut c = compositor(small_config(), 8);
    c.request_render(true).unwrap();
    c.asset_failed("404 assets/rpi.png");

    assert_eq!(c.pending_requests(), 0);
    assert_eq!(c.asset(), &AssetState::Failed("404 assets/rpi.png".to_string()));
    assert!(matches!(
        c.request_render(false),
        Err(CompositorError::AssetUnavailable(reason)) if reason.contains("404")
    ));
    assert!(!c.is_rendered());
}

#[test]
fn region_outside_base_rejects_the_asset() {
    let mut c = compositor(CustomizerConfig::default(), 9);
    c.request_render(true).unwrap();

    let err = c.asset_loaded(gradient(800, 600)).unwrap_err();
    assert!(matches!(
        err,
        CompositorError::Config(ConfigError::RegionOutOfBounds {
            base_width: 800,
            base_height: 600,
            ..
        })
    ));
    assert!(matches!(c.asset(), AssetState::Failed(_)));
    assert!(!c.is_rendered());
}

#[test]
fn missing_bar_surface_publishes_the_bare_base() {
    let config = CustomizerConfig {
        region: BarRegion {
            width: 0,
            height: 6,
            x: 10,
            y: 30,
        },
        ..CustomizerConfig::default()
    };
    let base = gradient(64, 48);
    let mut c = compositor(config, 10);
    c.asset_loaded(base.clone()).unwrap();

    assert_eq!(c.request_render(false).unwrap(), RenderOutcome::Rendered(1));
    let current = c.current().unwrap();
    assert!(!current.bar_applied());
    assert_eq!(current.image(), &base);
}

#[test]
fn composite_replaces_only_the_region() {
    let base = gradient(30, 20);
    let bar = PixelBuffer::filled(5, 4, ACCENT_RED).unwrap();
    let region = BarRegion {
        width: 5,
        height: 4,
        x: 25,
        y: 16,
    };
    let out = composite(&base, &bar, &region).unwrap();
    assert_bar_over_base(&out, &base, &region);
    assert_eq!(out.pixel(29, 19), ACCENT_RED);
    assert_eq!(out.pixel(24, 19), base.pixel(24, 19));
}

#[test]
fn composite_rejects_bar_overhanging_the_base() {
    let base = gradient(30, 20);
    let bar = PixelBuffer::filled(6, 4, WHITE).unwrap();
    let region = BarRegion {
        width: 6,
        height: 4,
        x: 25,
        y: 0,
    };
    assert!(matches!(
        composite(&base, &bar, &region),
        Err(CompositorError::Config(_))
    ));
}

#[test]
fn default_region_matches_the_logo_layout() {
    let region = BarRegion::default();
    assert_eq!(region, BarRegion { width: 500, height: 37, x: 710, y: 654 });
    assert!(region.fits_within(1210, 691));
    assert!(!region.fits_within(1209, 691));
    assert!(!region.fits_within(1210, 690));
    assert_eq!(ACCENT_RED, [214, 0, 28, 255]);
}
