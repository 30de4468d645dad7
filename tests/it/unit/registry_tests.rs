//! Unit tests for the page registry.

use pdf_studio::registry::{Direction, PageRegistry};
use pdf_studio::StudioError;

/// Deterministic pseudo-random sequence so failures reproduce
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound.max(1)
    }
}

#[test]
fn test_operations_match_reference_model() {
    let mut registry = PageRegistry::new();
    let mut model: Vec<u32> = Vec::new();
    let mut rng = Lcg(7);
    let mut next_value = 0u32;

    for _ in 0..500 {
        match rng.next(4) {
            0 | 1 => {
                next_value += 1;
                let len = registry.append(next_value);
                model.push(next_value);
                assert_eq!(len, model.len());
            }
            2 if !model.is_empty() => {
                let i = rng.next(model.len());
                assert_eq!(registry.remove_at(i).unwrap(), model.remove(i));
            }
            3 if !model.is_empty() => {
                let from = rng.next(model.len());
                let to = rng.next(model.len());
                registry.move_to(from, to).unwrap();
                let item = model.remove(from);
                model.insert(to, item);
            }
            _ => {}
        }
        assert_eq!(registry.as_slice(), model.as_slice());
    }
}

#[test]
fn test_out_of_range_is_error_not_panic() {
    let mut registry: PageRegistry<u32> = PageRegistry::new();
    assert!(matches!(
        registry.remove_at(0),
        Err(StudioError::IndexOutOfRange { index: 0, len: 0 })
    ));
    registry.append(1);
    assert!(registry.move_to(0, 3).is_err());
    assert!(registry.swap_neighbors(5, Direction::Up).is_err());
    assert_eq!(registry.as_slice(), &[1]);
}
