#![cfg(test)]
use iprange_common::error::RangeError;
use iprange_common::network::address::{parse_ipv4, to_dotted_quad};
use iprange_common::network::range::{Ipv4Range, validate_range};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::net::Ipv4Addr;

const SAMPLES: usize = 2_000;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x1921_6801)
}

fn expr(a: u32, b: u32) -> String {
    format!("{}-{}", Ipv4Addr::from(a), Ipv4Addr::from(b))
}

/// Formatting any value and parsing it back gives the same value and text.
#[test]
fn dotted_quad_round_trip() -> anyhow::Result<()> {
    let mut rng = rng();
    let edges = [0, 1, 255, 256, 0x7fff_ffff, 0x8000_0000, u32::MAX - 1, u32::MAX];

    let sampled: Vec<u32> = (0..SAMPLES).map(|_| rng.random()).collect();
    for value in edges.into_iter().chain(sampled) {
        let text = to_dotted_quad(value);
        let addr = parse_ipv4(&text)?;
        assert_eq!(u32::from(addr), value);
        assert_eq!(to_dotted_quad(u32::from(addr)), text);
    }
    Ok(())
}

#[test]
fn ascending_pairs_are_valid() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a: u32 = rng.random_range(0..u32::MAX);
        let b: u32 = rng.random_range(a + 1..=u32::MAX);

        assert_eq!(validate_range(&expr(a, b)), Ok(true), "{}", expr(a, b));
        assert!(expr(a, b).parse::<Ipv4Range>().is_ok());
    }
}

#[test]
fn descending_or_equal_pairs_are_rejected() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let b: u32 = rng.random();
        let a: u32 = rng.random_range(b..=u32::MAX);

        assert_eq!(validate_range(&expr(a, b)), Ok(false), "{}", expr(a, b));
        assert!(matches!(
            expr(a, b).parse::<Ipv4Range>(),
            Err(RangeError::UnorderedRange { .. })
        ));
    }
}

/// Numeric order agrees with octet-by-octet order.
#[test]
fn numeric_order_matches_octet_order() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = Ipv4Addr::from(rng.random::<u32>());
        let b = Ipv4Addr::from(rng.random::<u32>());

        let by_octets = a.octets() < b.octets();
        let by_value = u32::from(a) < u32::from(b);
        assert_eq!(by_octets, by_value);
        assert_eq!(validate_range(&format!("{a}-{b}")), Ok(by_octets));
    }
}

#[test]
fn out_of_range_octet_fails_on_either_side() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let valid = Ipv4Addr::from(rng.random::<u32>());
        let position: usize = rng.random_range(0..4);
        let bad_octet: u32 = rng.random_range(256..100_000);

        let mut octets: Vec<String> = Ipv4Addr::from(rng.random::<u32>())
            .octets()
            .iter()
            .map(|o| o.to_string())
            .collect();
        octets[position] = bad_octet.to_string();
        let invalid = octets.join(".");

        for e in [format!("{invalid}-{valid}"), format!("{valid}-{invalid}")] {
            assert!(
                matches!(validate_range(&e), Err(RangeError::InvalidAddress { .. })),
                "expected invalid address for '{e}'"
            );
        }
    }
}
