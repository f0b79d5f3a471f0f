use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::flag::{Band, BandLayout, FlagDesign, FlagOverlay};

/// A country whose flag can appear in the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Country {
    Estonia,
    France,
    Germany,
    Ireland,
    Italy,
    Nigeria,
    Poland,
    Spain,
    #[serde(rename = "UK")]
    Uk,
    Ukraine,
    #[serde(rename = "US")]
    Us,
}

const ESTONIA_BANDS: &[Band] = &[Band::new("#0072CE"), Band::new("#000000"), Band::new("#FFFFFF")];
const FRANCE_BANDS: &[Band] = &[Band::new("#002395"), Band::new("#FFFFFF"), Band::new("#ED2939")];
const GERMANY_BANDS: &[Band] = &[Band::new("#000000"), Band::new("#DD0000"), Band::new("#FFCE00")];
const IRELAND_BANDS: &[Band] = &[Band::new("#169B62"), Band::new("#FFFFFF"), Band::new("#FF883E")];
const ITALY_BANDS: &[Band] = &[Band::new("#009246"), Band::new("#FFFFFF"), Band::new("#CE2B37")];
const NIGERIA_BANDS: &[Band] = &[Band::new("#008751"), Band::new("#FFFFFF"), Band::new("#008751")];
const POLAND_BANDS: &[Band] = &[Band::new("#FFFFFF"), Band::new("#DC143C")];
const SPAIN_BANDS: &[Band] = &[
    Band::weighted("#AA151B", 1),
    Band::weighted("#F1BF00", 2),
    Band::weighted("#AA151B", 1),
];
const UK_BANDS: &[Band] = &[Band::new("#012169")];
const UKRAINE_BANDS: &[Band] = &[Band::new("#0057B7"), Band::new("#FFD700")];
const US_STRIPES: &[Band] = &[
    Band::new("#B22234"),
    Band::new("#FFFFFF"),
    Band::new("#B22234"),
    Band::new("#FFFFFF"),
    Band::new("#B22234"),
    Band::new("#FFFFFF"),
    Band::new("#B22234"),
    Band::new("#FFFFFF"),
    Band::new("#B22234"),
    Band::new("#FFFFFF"),
    Band::new("#B22234"),
    Band::new("#FFFFFF"),
    Band::new("#B22234"),
];

impl Country {
    /// Every country in the quiz pool, in alphabetical order.
    pub const ALL: [Country; 11] = [
        Country::Estonia,
        Country::France,
        Country::Germany,
        Country::Ireland,
        Country::Italy,
        Country::Nigeria,
        Country::Poland,
        Country::Spain,
        Country::Uk,
        Country::Ukraine,
        Country::Us,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Country::Estonia => "Estonia",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Ireland => "Ireland",
            Country::Italy => "Italy",
            Country::Nigeria => "Nigeria",
            Country::Poland => "Poland",
            Country::Spain => "Spain",
            Country::Uk => "UK",
            Country::Ukraine => "Ukraine",
            Country::Us => "US",
        }
    }

    /// Spoken description of the flag, used as the button's accessibility label.
    #[must_use]
    pub fn accessibility_label(self) -> &'static str {
        match self {
            Country::Estonia => {
                "Flag with three horizontal stripes. Top stripe blue, middle stripe black, bottom stripe white."
            }
            Country::France => {
                "Flag with three vertical stripes. Left stripe blue, middle stripe white, right stripe red."
            }
            Country::Germany => {
                "Flag with three horizontal stripes. Top stripe black, middle stripe red, bottom stripe gold."
            }
            Country::Ireland => {
                "Flag with three vertical stripes. Left stripe green, middle stripe white, right stripe orange."
            }
            Country::Italy => {
                "Flag with three vertical stripes. Left stripe green, middle stripe white, right stripe red."
            }
            Country::Nigeria => {
                "Flag with three vertical stripes. Left stripe green, middle stripe white, right stripe green."
            }
            Country::Poland => "Flag with two horizontal stripes. Top stripe white, bottom stripe red.",
            Country::Spain => {
                "Flag with three horizontal stripes. Top thin stripe red, middle thick stripe gold with a crest on the left, bottom thin stripe red."
            }
            Country::Uk => {
                "Flag with overlapping red and white crosses, both straight and diagonally, on a blue background."
            }
            Country::Ukraine => {
                "Flag with two horizontal stripes. Top stripe blue, bottom stripe yellow."
            }
            Country::Us => {
                "Flag with many red and white stripes, with white stars on a blue background in the top-left corner."
            }
        }
    }

    #[must_use]
    pub fn design(self) -> FlagDesign {
        use BandLayout::{Horizontal, Vertical};

        match self {
            Country::Estonia => FlagDesign::new(Horizontal, ESTONIA_BANDS, None),
            Country::France => FlagDesign::new(Vertical, FRANCE_BANDS, None),
            Country::Germany => FlagDesign::new(Horizontal, GERMANY_BANDS, None),
            Country::Ireland => FlagDesign::new(Vertical, IRELAND_BANDS, None),
            Country::Italy => FlagDesign::new(Vertical, ITALY_BANDS, None),
            Country::Nigeria => FlagDesign::new(Vertical, NIGERIA_BANDS, None),
            Country::Poland => FlagDesign::new(Horizontal, POLAND_BANDS, None),
            Country::Spain => FlagDesign::new(
                Horizontal,
                SPAIN_BANDS,
                Some(FlagOverlay::Crest { color: "#AA151B" }),
            ),
            Country::Uk => FlagDesign::new(
                Horizontal,
                UK_BANDS,
                Some(FlagOverlay::Union {
                    cross: "#C8102E",
                    saltire: "#FFFFFF",
                }),
            ),
            Country::Ukraine => FlagDesign::new(Horizontal, UKRAINE_BANDS, None),
            Country::Us => FlagDesign::new(
                Horizontal,
                US_STRIPES,
                Some(FlagOverlay::Canton { color: "#3C3B6E" }),
            ),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
