#[cfg(test)]
mod tests {
    use crate::constants::*;
    use crate::enums::*;
    use crate::state::MatchSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    /// Verify the behavior enums round-trip through serde_json.
    #[test]
    fn test_weapon_status_serde() {
        let variants = vec![
            WeaponStatus::Unready,
            WeaponStatus::Equip,
            WeaponStatus::Ready,
            WeaponStatus::Shot,
            WeaponStatus::Reload,
            WeaponStatus::Empty,
            WeaponStatus::OutOfAmmo,
            WeaponStatus::Hide,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: WeaponStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_bot_state_serde() {
        let variants = vec![
            BotState::Exploring,
            BotState::Moving,
            BotState::Attacking(AttackState::Pursuing),
            BotState::Attacking(AttackState::Retreating),
            BotState::Dead,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: BotState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-12);
        assert!((a.squared_range_to(&b) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_direction_to_is_unit_or_zero() {
        let a = Position::new(1.0, 2.0, 0.0);
        let b = Position::new(4.0, 6.0, 0.0);
        let d = a.direction_to(&b);
        assert!((d.length() - 1.0).abs() < 1e-12);

        let z = a.direction_to(&a);
        assert_eq!(z.length(), 0.0);
    }

    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(1.0, 2.0, 2.0);
        assert!((v.speed() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..TICK_RATE {
            t.advance();
        }
        assert_eq!(t.tick, TICK_RATE as u64);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let snap = MatchSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap.time.tick, back.time.tick);
        assert_eq!(back.agents.len(), 0);
    }
}
