// Property-based round trips over arbitrary payloads and thresholds.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tagcodec_core::compression::registry::standard_tags;
    use tagcodec_core::prelude::{tag_ids, Codec, Registry, Thresholds};

    fn codec_for(tags: &[u8], min: usize, ratio: f64) -> Codec {
        let reg = Registry::from_tags(tags).unwrap();
        Codec::new(reg, Thresholds::new(min, ratio).unwrap()).unwrap()
    }

    // Identity first, then any subset of the remaining built-ins in any order.
    fn registry_tags() -> impl Strategy<Value = Vec<u8>> {
        let rest: Vec<u8> = standard_tags().into_iter().skip(1).collect();
        Just(rest)
            .prop_shuffle()
            .prop_flat_map(|shuffled| {
                let n = shuffled.len();
                (Just(shuffled), 0..=n)
            })
            .prop_map(|(shuffled, take)| {
                let mut tags = vec![tag_ids::IDENTITY];
                tags.extend(shuffled.into_iter().take(take));
                tags
            })
    }

    proptest! {
        #[test]
        fn prop_round_trip_any_registry(
            tags in registry_tags(),
            payload in proptest::collection::vec(any::<u8>(), 0..2048),
            min in 0usize..512,
            ratio in 0.05f64..1.5,
        ) {
            let codec = codec_for(&tags, min, ratio);
            let frame = codec.encode(&payload).unwrap();
            prop_assert_eq!(codec.decode(&frame).unwrap(), payload);
        }

        #[test]
        fn prop_round_trip_repetitive(
            unit in proptest::collection::vec(any::<u8>(), 1..16),
            repeats in 1usize..400,
        ) {
            let payload: Vec<u8> = unit.iter().cycle().take(unit.len() * repeats).copied().collect();
            let codec = Codec::default();
            let frame = codec.encode(&payload).unwrap();
            prop_assert!(frame.len() <= payload.len() + 1);
            prop_assert_eq!(codec.decode(&frame).unwrap(), payload);
        }

        #[test]
        fn prop_small_payloads_use_identity(
            payload in proptest::collection::vec(any::<u8>(), 1..128),
        ) {
            let codec = codec_for(&standard_tags(), 128, 0.8);
            let frame = codec.encode(&payload).unwrap();
            prop_assert_eq!(frame[0], tag_ids::IDENTITY);
            prop_assert_eq!(&frame[1..], payload.as_slice());
        }

        #[test]
        fn prop_selected_body_clears_ratio_or_is_identity(
            payload in proptest::collection::vec(0u8..4, 1..4096),
            ratio in 0.05f64..1.0,
        ) {
            let codec = codec_for(&standard_tags(), 0, ratio);
            let frame = codec.encode(&payload).unwrap();
            if frame[0] != tag_ids::IDENTITY {
                let limit = payload.len() as f64 * ratio;
                prop_assert!(((frame.len() - 1) as f64) < limit);
                prop_assert!(frame.len() < payload.len() + 1);
            }
        }

        #[test]
        fn prop_encode_is_deterministic(
            payload in proptest::collection::vec(any::<u8>(), 0..1024),
        ) {
            let codec = Codec::default();
            prop_assert_eq!(codec.encode(&payload).unwrap(), codec.encode(&payload).unwrap());
        }
    }
}
