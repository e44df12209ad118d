//! Running the dealer.

use crate::{
    config::DealConfig,
    dealer,
    deck::Deck,
    table::{CardPlacer, HtmlTable},
};
use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use tabletop_math::{Transform, angle::Degrees};

pub fn init_logging() -> Result<()> {
    env_logger::init();
    Ok(())
}

/// Shuffles and deals the configured decks onto an HTML table and returns the
/// rendered page.
pub fn run_deal(config: &DealConfig) -> Result<String> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Dealing {} deck(s) with seed {seed}", config.decks);
    let mut rng = Pcg64Mcg::seed_from_u64(seed);

    let mut deck = Deck::new(config.decks);
    deck.shuffle(&mut rng);

    let placer = CardPlacer::from_config(config);
    let mut table = HtmlTable::new(config.asset_dir.as_str());

    let card_count = deck.len();
    with_timing_info_logging!("Dealing {} cards", card_count; {
        dealer::deal(&mut deck, &placer, &mut table, &mut rng)
    })?;

    Ok(table.into_document())
}

/// Composes a transform from optional rotation angles, translation and
/// scaling and returns its CSS declaration.
pub fn transform_css(
    rotation: Option<[Degrees; 3]>,
    translation: Option<[f64; 3]>,
    scaling: Option<[f64; 3]>,
) -> String {
    let mut transform = Transform::new();
    if let Some([x, y, z]) = rotation {
        transform.rotate_by(x, y, z);
    }
    if let Some([x, y, z]) = translation {
        transform.translate(x, y, z);
    }
    if let Some([x, y, z]) = scaling {
        transform.scale(x, y, z);
    }
    transform.css()
}
