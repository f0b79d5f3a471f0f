use flag_core::model::{BandLayout, FlagDesign, FlagOverlay};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagOverlayVm {
    pub class: &'static str,
    pub style: String,
}

/// CSS-ready description of a flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagVm {
    pub style: String,
    pub band_styles: Vec<String>,
    pub overlay: Option<FlagOverlayVm>,
}

#[must_use]
pub fn map_flag(design: &FlagDesign) -> FlagVm {
    let direction = match design.layout() {
        BandLayout::Horizontal => "column",
        BandLayout::Vertical => "row",
    };

    let band_styles = design
        .bands()
        .iter()
        .map(|band| format!("background: {}; flex-grow: {};", band.color, band.weight))
        .collect();

    let overlay = design.overlay().map(|overlay| match overlay {
        FlagOverlay::Canton { color } => FlagOverlayVm {
            class: "flag-canton",
            style: format!("background: {color};"),
        },
        FlagOverlay::Union { cross, saltire } => FlagOverlayVm {
            class: "flag-union",
            style: format!("--flag-cross: {cross}; --flag-saltire: {saltire};"),
        },
        FlagOverlay::Crest { color } => FlagOverlayVm {
            class: "flag-crest",
            style: format!("border-color: {color};"),
        },
    });

    FlagVm {
        style: format!("flex-direction: {direction};"),
        band_styles,
        overlay,
    }
}
