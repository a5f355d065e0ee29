//! Property tests for the 256-bit modular arithmetic, checked against
//! num-bigint as the arbitrary-precision reference.

use num_bigint::BigUint;
use proptest::prelude::*;

use gmsm::primitives::{Modulus, U256, U512};

fn to_big(value: &U256) -> BigUint {
    BigUint::from_bytes_be(&value.to_be_bytes())
}

fn from_big(value: &BigUint) -> U256 {
    let bytes = value.to_bytes_be();
    assert!(bytes.len() <= 32);

    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    U256::from_be_bytes(&out)
}

fn modulus_big(modulus: Modulus) -> BigUint {
    to_big(&modulus.value())
}

// -------------------------------------------------------
// U256 BASICS
// -------------------------------------------------------

#[test]
fn u256_byte_round_trip_and_ordering() {
    let mut small = [0u8; 32];
    small[31] = 2;
    let mut large = [0u8; 32];
    large[0] = 1;

    let a = U256::from_be_bytes(&small);
    let b = U256::from_be_bytes(&large);

    assert_eq!(a.to_be_bytes(), small);
    assert!(a < b);
    assert!(!a.is_zero());
    assert!(U256::ZERO.is_zero());
    assert!(U256::ZERO < U256::ONE);
}

#[test]
fn widening_mul_max_operands() {
    // (2^256 − 1)² exercises every carry path of the schoolbook loop.
    let max = U256::from_be_bytes(&[0xFF; 32]);
    let product = max.widening_mul(&max);

    let expected = to_big(&max) * to_big(&max);

    // Compare through the reduction paths, which is what the engine
    // actually consumes the product through.
    assert_eq!(
        to_big(&Modulus::P.reduce(&product)),
        expected.clone() % modulus_big(Modulus::P)
    );
    assert_eq!(
        to_big(&Modulus::N.reduce(&product)),
        expected % modulus_big(Modulus::N)
    );
}

// -------------------------------------------------------
// REDUCTION WORST CASES
// -------------------------------------------------------

#[test]
fn reduction_pathological_high_halves() {
    let max = U256::from_be_bytes(&[0xFF; 32]);
    let p_minus_1 = from_big(&(modulus_big(Modulus::P) - 1u32));
    let n_minus_1 = from_big(&(modulus_big(Modulus::N) - 1u32));

    let candidates = [
        (U256::ZERO, U256::ZERO),
        (U256::ZERO, max),
        (max, U256::ZERO),
        (max, max),
        (n_minus_1, max),
        (p_minus_1, max),
        (U256::ONE, U256::ZERO),
    ];

    for (high, low) in candidates {
        let wide = U512::from_halves(high, low);
        let expected: BigUint = (to_big(&high) << 256) + to_big(&low);

        for modulus in [Modulus::P, Modulus::N] {
            assert_eq!(
                to_big(&modulus.reduce(&wide)),
                expected.clone() % modulus_big(modulus),
                "high={high} low={low} modulus={modulus:?}"
            );
        }
    }
}

proptest! {
    #[test]
    fn reduce_matches_reference(high: [u8; 32], low: [u8; 32]) {
        let high = U256::from_be_bytes(&high);
        let low = U256::from_be_bytes(&low);
        let wide = U512::from_halves(high, low);

        let value: BigUint = (to_big(&high) << 256) + to_big(&low);

        for modulus in [Modulus::P, Modulus::N] {
            prop_assert_eq!(
                to_big(&modulus.reduce(&wide)),
                value.clone() % modulus_big(modulus)
            );
        }
    }

    #[test]
    fn mul_matches_reference(a: [u8; 32], b: [u8; 32]) {
        let a = U256::from_be_bytes(&a);
        let b = U256::from_be_bytes(&b);

        for modulus in [Modulus::P, Modulus::N] {
            prop_assert_eq!(
                to_big(&modulus.mul(&a, &b)),
                to_big(&a) * to_big(&b) % modulus_big(modulus)
            );
        }
    }

    #[test]
    fn add_accepts_unreduced_inputs(a: [u8; 32], b: [u8; 32]) {
        // The signature digest e enters mod-n addition without prior
        // reduction, so add must cope with any 256-bit operands.
        let a = U256::from_be_bytes(&a);
        let b = U256::from_be_bytes(&b);

        for modulus in [Modulus::P, Modulus::N] {
            prop_assert_eq!(
                to_big(&modulus.add(&a, &b)),
                (to_big(&a) + to_big(&b)) % modulus_big(modulus)
            );
        }
    }

    #[test]
    fn sub_matches_reference(a: [u8; 32], b: [u8; 32]) {
        let a = U256::from_be_bytes(&a);
        let b = U256::from_be_bytes(&b);

        for modulus in [Modulus::P, Modulus::N] {
            let m = modulus_big(modulus);
            let a_red = from_big(&(to_big(&a) % &m));
            let b_red = from_big(&(to_big(&b) % &m));

            prop_assert_eq!(
                to_big(&modulus.sub(&a_red, &b_red)),
                (to_big(&a_red) + &m - to_big(&b_red)) % &m
            );
        }
    }

    #[test]
    fn inversion_round_trips(a: [u8; 32]) {
        let a = U256::from_be_bytes(&a);

        for modulus in [Modulus::P, Modulus::N] {
            let m = modulus_big(modulus);
            let a_red = from_big(&(to_big(&a) % &m));

            if a_red.is_zero() {
                prop_assert!(modulus.invert(&a_red).is_err());
            } else {
                let inverse = modulus.invert(&a_red).unwrap();
                prop_assert_eq!(
                    to_big(&modulus.mul(&a_red, &inverse)),
                    BigUint::from(1u32)
                );
            }
        }
    }
}

// -------------------------------------------------------
// INVERSION EDGE CASES
// -------------------------------------------------------

#[test]
fn inversion_of_zero_fails() {
    assert!(Modulus::P.invert(&U256::ZERO).is_err());
    assert!(Modulus::N.invert(&U256::ZERO).is_err());
}

#[test]
fn inversion_of_one_is_one() {
    assert_eq!(Modulus::P.invert(&U256::ONE).unwrap(), U256::ONE);
    assert_eq!(Modulus::N.invert(&U256::ONE).unwrap(), U256::ONE);
}

#[test]
fn inversion_of_modulus_minus_one_is_itself() {
    // −1 is its own inverse in any group of units.
    for modulus in [Modulus::P, Modulus::N] {
        let minus_one = from_big(&(modulus_big(modulus) - 1u32));
        assert_eq!(modulus.invert(&minus_one).unwrap(), minus_one);
    }
}
