use proptest::prelude::*;
use quantum::state::check_density;
use simulator::{Inbound, Session};
use std::f64::consts::PI;

fn arb_inbound() -> impl Strategy<Value = Inbound> {
    prop_oneof![
        (0.0f64..=PI, 0.0f64..(2.0 * PI)).prop_map(|(theta, phi)| Inbound::SetAngles { theta, phi }),
        (0.0f64..=0.2, 0.0f64..=0.2, 0.0f64..=0.2, any::<bool>()).prop_map(
            |(dephasing, depolarizing, damping, auto)| Inbound::SetNoise {
                dephasing,
                depolarizing,
                damping,
                auto,
            }
        ),
        Just(Inbound::Tick),
        Just(Inbound::Tick),
        Just(Inbound::Reset),
    ]
}

proptest! {
    #[test]
    fn every_transition_keeps_a_valid_state(events in prop::collection::vec(arb_inbound(), 1..60)) {
        let mut session = Session::default();
        for msg in events {
            let snap = session.handle(msg);
            prop_assert!(check_density(session.rho(), 1e-9).is_ok());
            prop_assert!(snap.purity > 0.0 && snap.purity <= 1.0 + 1e-9);
            prop_assert!(snap.bloch.rmag <= 1.0 + 1e-9);
            for pair in [snap.probs.z, snap.probs.x, snap.probs.y] {
                prop_assert!((pair[0] + pair[1] - 1.0).abs() < 1e-9);
            }
            prop_assert_eq!(snap.mixed, session.is_mixed());
        }
    }

    #[test]
    fn reset_undoes_any_history(events in prop::collection::vec(arb_inbound(), 0..40)) {
        let mut session = Session::default();
        for msg in events {
            session.handle(msg);
        }
        let (theta, phi) = session.angles();

        let after_reset = session.reset();
        let mut fresh = Session::default();
        let expected = fresh.set_angles(theta, phi);

        prop_assert_eq!(after_reset, expected);
        prop_assert!(!after_reset.mixed);
    }
}
