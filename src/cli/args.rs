use clap::Args;

use super::parse::parse_bounds;
use rentmap_core::query::FilterInput;
use rentmap_core::viewport::Bounds;

/// Filter form fields. Deposit and rent are in 만원.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// District (exact match)
    #[arg(long)]
    pub district: Option<String>,

    /// Minimum exclusive area (m²)
    #[arg(long)]
    pub area_min: Option<f64>,

    /// Maximum exclusive area (m²)
    #[arg(long)]
    pub area_max: Option<f64>,

    /// Minimum deposit (만원)
    #[arg(long)]
    pub deposit_min: Option<f64>,

    /// Maximum deposit (만원)
    #[arg(long)]
    pub deposit_max: Option<f64>,

    /// Minimum monthly rent (만원)
    #[arg(long)]
    pub rent_min: Option<f64>,

    /// Maximum monthly rent (만원)
    #[arg(long)]
    pub rent_max: Option<f64>,

    /// Structure (exact match)
    #[arg(long)]
    pub structure: Option<String>,

    /// Gender; `무관` keeps only listings without a restriction
    #[arg(long)]
    pub gender: Option<String>,

    /// Supply type (exact match)
    #[arg(long)]
    pub supply_type: Option<String>,
}

impl FilterArgs {
    pub fn to_input(&self) -> FilterInput {
        FilterInput {
            district: self.district.clone().unwrap_or_default(),
            area_min: self.area_min,
            area_max: self.area_max,
            deposit_min: self.deposit_min,
            deposit_max: self.deposit_max,
            rent_min: self.rent_min,
            rent_max: self.rent_max,
            structure: self.structure.clone().unwrap_or_default(),
            gender: self.gender.clone().unwrap_or_default(),
            supply_type: self.supply_type.clone().unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_input() == FilterInput::default()
    }
}

/// Everything that narrows what the viewer shows
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Search keyword (id, address, district or unit)
    #[arg(long, short)]
    pub search: Option<String>,

    /// Only listings inside `south,west,north,east`
    #[arg(long, value_parser = parse_bounds, allow_hyphen_values = true)]
    pub bbox: Option<Bounds>,
}
