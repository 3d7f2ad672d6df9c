use super::resolver::VisualState;

/// Solid colour shown when a section has no background image or it failed to load.
pub const NEUTRAL_BACKGROUND: &str = "#1e1e2e";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssetState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl AssetState {
    /// Load callbacks that arrive after a failure don't resurrect the image.
    pub fn on_load(self) -> Self {
        match self {
            AssetState::Failed => AssetState::Failed,
            _ => AssetState::Loaded,
        }
    }

    pub fn on_error(self) -> Self {
        AssetState::Failed
    }

    /// Folds in an image that finished before its load/error listeners were attached,
    /// as happens when the browser loads a server-rendered `<img>` ahead of hydration.
    pub fn settle(self, complete: bool, natural_width: u32) -> Self {
        match (complete, natural_width) {
            (false, _) => self,
            (true, 0) => self.on_error(),
            (true, _) => self.on_load(),
        }
    }

    pub fn shows_image(self) -> bool {
        self != AssetState::Failed
    }
}

/// Inline styles for the stacked background layers of one section.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStyles {
    pub base: String,
    pub image: Option<String>,
    pub gradient: String,
    pub texture: String,
}

pub fn layer_styles(state: &VisualState, image: Option<&str>, asset: AssetState) -> LayerStyles {
    let image = image.filter(|_| asset.shows_image()).map(|_| {
        // still loading: keep the layer transparent so the solid base shows through
        let opacity = if asset == AssetState::Loaded {
            state.opacity
        } else {
            0.0
        };
        format!(
            "opacity: {opacity:.3}; transform: scale({:.4}); filter: blur({:.1}px);",
            state.scale, state.blur_px
        )
    });
    LayerStyles {
        base: format!("background-color: {NEUTRAL_BACKGROUND};"),
        image,
        gradient: format!("opacity: {:.3};", state.gradient_opacity),
        texture: "opacity: 0.04;".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> VisualState {
        VisualState {
            opacity: 0.8,
            scale: 1.025,
            blur_px: 4.0,
            gradient_opacity: 0.48,
        }
    }

    #[test]
    fn test_loaded_image_uses_visual_state() {
        let styles = layer_styles(&state(), Some("/img/hero.svg"), AssetState::Loaded);
        assert_eq!(
            styles.image.as_deref(),
            Some("opacity: 0.800; transform: scale(1.0250); filter: blur(4.0px);")
        );
        assert_eq!(styles.gradient, "opacity: 0.480;");
    }

    #[test]
    fn test_failed_image_falls_back_to_solid() {
        let asset = AssetState::Loading.on_error();
        let styles = layer_styles(&state(), Some("/img/missing.webp"), asset);
        assert_eq!(styles.image, None);
        assert!(styles.base.contains(NEUTRAL_BACKGROUND));
        // a late load event doesn't bring it back
        assert_eq!(asset.on_load(), AssetState::Failed);
    }

    #[test]
    fn test_loading_image_is_transparent() {
        let styles = layer_styles(&state(), Some("/img/hero.svg"), AssetState::Loading);
        assert!(styles.image.unwrap().starts_with("opacity: 0.000;"));
    }

    #[test]
    fn test_settle_image_loaded_before_hydration() {
        // still downloading: wait for the listeners
        assert_eq!(AssetState::Loading.settle(false, 0), AssetState::Loading);
        assert_eq!(AssetState::Loading.settle(true, 1920), AssetState::Loaded);
        // complete with no pixels is a broken image
        assert_eq!(AssetState::Loading.settle(true, 0), AssetState::Failed);
        assert_eq!(AssetState::Failed.settle(true, 1920), AssetState::Failed);
    }

    #[test]
    fn test_no_image() {
        let styles = layer_styles(&state(), None, AssetState::Loaded);
        assert_eq!(styles.image, None);
    }
}
