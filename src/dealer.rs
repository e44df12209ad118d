//! Dealing a deck onto a surface.

use crate::{
    deck::Deck,
    table::{CardPlacer, Surface},
};
use anyhow::{Context, Result};
use rand::Rng;

/// Draws cards from the deck until it is empty, placing each on the surface
/// with a transform from the placer. Returns the number of cards dealt.
pub fn deal<S, R>(deck: &mut Deck, placer: &CardPlacer, surface: &mut S, rng: &mut R) -> Result<usize>
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let mut dealt = 0;
    while let Some(card) = deck.draw() {
        let transform = placer.random_transform(rng);
        log::debug!("Placing {card} at {:?}", transform.position());
        surface
            .place(&card, &transform)
            .with_context(|| format!("Could not place {card}"))?;
        dealt += 1;
    }
    log::info!("Dealt {dealt} cards");
    Ok(dealt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use anyhow::bail;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use tabletop_math::{Transform, angle::Degrees};

    #[derive(Default)]
    struct CountingSurface {
        placed: Vec<Card>,
        fail_after: Option<usize>,
    }

    impl Surface for CountingSurface {
        fn place(&mut self, card: &Card, _transform: &Transform) -> Result<()> {
            if self.fail_after == Some(self.placed.len()) {
                bail!("surface is full");
            }
            self.placed.push(*card);
            Ok(())
        }
    }

    #[test]
    fn dealing_places_cards_in_draw_order() {
        let mut deck = Deck::new(1);
        let expected: Vec<_> = deck.iter().copied().collect();
        let mut surface = CountingSurface::default();

        let dealt = deal(
            &mut deck,
            &CardPlacer::new(Degrees(360.0), 10.0),
            &mut surface,
            &mut Pcg64Mcg::seed_from_u64(0),
        )
        .unwrap();

        assert_eq!(dealt, 52);
        assert!(deck.is_empty());
        assert_eq!(surface.placed, expected);
    }

    #[test]
    fn dealing_empty_deck_places_nothing() {
        let mut surface = CountingSurface::default();
        let dealt = deal(
            &mut Deck::new(0),
            &CardPlacer::new(Degrees(360.0), 10.0),
            &mut surface,
            &mut Pcg64Mcg::seed_from_u64(0),
        )
        .unwrap();
        assert_eq!(dealt, 0);
        assert!(surface.placed.is_empty());
    }

    #[test]
    fn dealing_stops_at_surface_failure() {
        let mut deck = Deck::new(1);
        let mut surface = CountingSurface {
            fail_after: Some(5),
            ..Default::default()
        };
        let result = deal(
            &mut deck,
            &CardPlacer::new(Degrees(360.0), 10.0),
            &mut surface,
            &mut Pcg64Mcg::seed_from_u64(0),
        );
        assert!(result.is_err());
        assert_eq!(surface.placed.len(), 5);
        assert_eq!(deck.len(), 46);
    }
}
