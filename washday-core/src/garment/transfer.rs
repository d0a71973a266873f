//! Pile to drum transfer
//!
//! The only move a garment can make. Any input mechanism (drag and drop,
//! keyboard, scripted test) ends up here with a garment kind.

use super::catalog::GarmentKind;
use super::container::{Container, Garment};
use crate::controller::GameError;

/// Move a garment from the pile into the drum
///
/// The garment enters the drum soiled. Fails with [`GameError::NotFound`]
/// when the kind is not in the pile (double drop, stale reference), in
/// which case neither container changes.
pub fn transfer(
    pile: &mut Container,
    drum: &mut Container,
    kind: GarmentKind,
) -> Result<(), GameError> {
    let garment = pile.take(kind).ok_or(GameError::NotFound(kind))?;

    // Pile and drum together never hold more than one catalog
    let _ = drum.push(Garment::soiled(garment.kind));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garment::Catalog;

    #[test]
    fn test_transfer_moves_garment() {
        let mut pile = Container::from_catalog(&Catalog::standard());
        let mut drum = Container::new();

        transfer(&mut pile, &mut drum, GarmentKind::Sock).unwrap();

        assert!(!pile.contains(GarmentKind::Sock));
        assert!(drum.contains(GarmentKind::Sock));
        assert_eq!(pile.len() + drum.len(), 4);
    }

    #[test]
    fn test_double_transfer_not_found() {
        let mut pile = Container::from_catalog(&Catalog::standard());
        let mut drum = Container::new();

        transfer(&mut pile, &mut drum, GarmentKind::Towel).unwrap();
        let pile_before = pile.clone();
        let drum_before = drum.clone();

        let result = transfer(&mut pile, &mut drum, GarmentKind::Towel);
        assert_eq!(result, Err(GameError::NotFound(GarmentKind::Towel)));
        assert_eq!(pile, pile_before);
        assert_eq!(drum, drum_before);
    }
}
