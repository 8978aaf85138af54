#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use skirmish_core::constants::*;
    use skirmish_core::enums::*;
    use skirmish_core::surface::{NavigationQuery, Region, RegionCostQuery, SurfaceRef};
    use skirmish_core::types::{EntityId, Position};

    use crate::agent::Bot;
    use crate::combat::update_aim_and_shot;
    use crate::fsm::CombatFsm;
    use crate::goals::node::run_subgoals;
    use crate::goals::{BotMind, GoalContext, GoalNode};
    use crate::items::{ItemInfo, ItemQuery};
    use crate::memory::MemorySystem;
    use crate::planner::PathPlanner;
    use crate::regulator::Regulator;
    use crate::targeting::TargetSystem;
    use crate::vision::Vision;
    use crate::weapons::WeaponSystem;

    // ---- Test doubles for the external oracles ----

    /// Single-region surface where everything is walkable and visible.
    struct OpenNav;

    impl NavigationQuery for OpenNav {
        fn nearest_surface(
            &self,
            _point: &Position,
            _half_extents: (f64, f64, f64),
        ) -> Option<SurfaceRef> {
            Some(SurfaceRef(0))
        }

        fn raycast(&self, _start: SurfaceRef, _from: &Position, _to: &Position) -> Option<f64> {
            Some(1.0)
        }

        fn random_region(&self, _sample: f64) -> Option<Region> {
            Some(Region {
                index: 0,
                centroid: Position::new(5.0, 5.0, 0.0),
            })
        }

        fn region_for_point(&self, _point: &Position, _tolerance: f64) -> Option<Region> {
            Some(Region {
                index: 0,
                centroid: Position::new(5.0, 5.0, 0.0),
            })
        }

        fn region_count(&self) -> usize {
            1
        }

        fn find_path(&self, from: &Position, to: &Position) -> Option<Vec<Position>> {
            Some(vec![*from, *to])
        }
    }

    /// Surface whose raycasts always stop partway.
    struct OccludedNav;

    impl NavigationQuery for OccludedNav {
        fn nearest_surface(
            &self,
            _point: &Position,
            _half_extents: (f64, f64, f64),
        ) -> Option<SurfaceRef> {
            Some(SurfaceRef(0))
        }

        fn raycast(&self, _start: SurfaceRef, _from: &Position, _to: &Position) -> Option<f64> {
            Some(0.4)
        }

        fn random_region(&self, _sample: f64) -> Option<Region> {
            None
        }

        fn region_for_point(&self, _point: &Position, _tolerance: f64) -> Option<Region> {
            None
        }

        fn region_count(&self) -> usize {
            0
        }

        fn find_path(&self, _from: &Position, _to: &Position) -> Option<Vec<Position>> {
            None
        }
    }

    struct ZeroCosts;

    impl RegionCostQuery for ZeroCosts {
        fn cost(&self, _from_region: usize, _to_region: usize) -> f64 {
            0.0
        }
    }

    struct FixedItems(Vec<ItemInfo>);

    impl ItemQuery for FixedItems {
        fn items(&self) -> &[ItemInfo] {
            &self.0
        }
    }

    fn health_pack(id: u64, position: Position, active: bool) -> ItemInfo {
        ItemInfo {
            id: EntityId(id),
            kind: ItemKind::HealthPack,
            position,
            active,
            region: Some(0),
        }
    }

    /// Run `f` with a BotMind/GoalContext pair built over the given bot
    /// and oracles.
    fn with_mind<R>(
        bot: &mut Bot,
        nav: &dyn NavigationQuery,
        items: &dyn ItemQuery,
        planner: &mut PathPlanner,
        now: f64,
        f: impl FnOnce(&mut BotMind, &mut GoalContext) -> R,
    ) -> R {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut pickups = Vec::new();
        let Bot {
            id,
            body,
            vision,
            memory,
            targeting,
            weapons,
            steering,
            fsm,
            path,
            ..
        } = bot;
        let mut mind = BotMind {
            id: *id,
            body,
            vision,
            memory,
            targeting,
            weapons,
            steering,
            fsm,
            path,
        };
        let mut ctx = GoalContext {
            now,
            dt: DT,
            nav,
            costs: &ZeroCosts,
            items,
            planner,
            rng: &mut rng,
            pickups: &mut pickups,
        };
        f(&mut mind, &mut ctx)
    }

    // ---- Regulator ----

    #[test]
    fn test_regulator_disabled_always_ready() {
        let mut r = Regulator::new(0.0);
        for _ in 0..100 {
            assert!(r.ready());
        }
        let mut r = Regulator::new(-5.0);
        assert!(r.ready());
    }

    #[test]
    fn test_regulator_interval_cadence() {
        // 2 updates/sec at a 60 Hz base: ready exactly every 30th call.
        let mut r = Regulator::new(2.0);
        let mut fires = Vec::new();
        for i in 1..=90 {
            if r.ready() {
                fires.push(i);
            }
        }
        assert_eq!(fires, vec![30, 60, 90]);
    }

    #[test]
    fn test_regulator_reset_restarts_count() {
        let mut r = Regulator::new(2.0);
        for _ in 0..29 {
            assert!(!r.ready());
        }
        r.reset();
        for _ in 0..29 {
            assert!(!r.ready());
        }
        assert!(r.ready());
    }

    // ---- Memory ----

    #[test]
    fn test_memory_span_boundary_inclusive() {
        let mut memory = MemorySystem::new(10.0);
        let e = EntityId(1);
        memory.sense(e, &Position::default(), true, 5.0);
        // Exactly at the boundary: 15.0 - 5.0 == span, still valid.
        assert_eq!(memory.valid_records(15.0).len(), 1);
        // One past: excluded, but the record itself survives.
        assert_eq!(memory.valid_records(15.01).len(), 0);
        assert!(memory.has_record(e));
    }

    #[test]
    fn test_memory_lazy_creation_requires_sighting() {
        let mut memory = MemorySystem::new(10.0);
        let e = EntityId(2);
        memory.sense(e, &Position::default(), false, 1.0);
        assert!(!memory.has_record(e), "unseen entities leave no record");

        memory.sense(e, &Position::default(), true, 2.0);
        assert!(memory.has_record(e));
    }

    #[test]
    fn test_memory_time_became_visible_on_transition_only() {
        let mut memory = MemorySystem::new(10.0);
        let e = EntityId(3);
        memory.sense(e, &Position::default(), true, 1.0);
        assert_eq!(memory.record(e).unwrap().time_became_visible, 1.0);

        // Still visible: the sighting start must not move.
        memory.sense(e, &Position::default(), true, 2.0);
        assert_eq!(memory.record(e).unwrap().time_became_visible, 1.0);

        // Lost, then reacquired: a new sighting starts.
        memory.sense(e, &Position::default(), false, 3.0);
        memory.sense(e, &Position::default(), true, 4.0);
        assert_eq!(memory.record(e).unwrap().time_became_visible, 4.0);
    }

    #[test]
    fn test_memory_create_overwrites() {
        let mut memory = MemorySystem::new(10.0);
        let e = EntityId(4);
        memory.sense(e, &Position::new(1.0, 1.0, 0.0), true, 1.0);
        memory.create_record(e);
        assert_eq!(memory.record(e).unwrap().time_last_sensed, -1.0);
    }

    // ---- Target selection ----

    #[test]
    fn test_target_visible_beats_closer_invisible() {
        let mut memory = MemorySystem::new(100.0);
        let near = EntityId(1);
        let far = EntityId(2);
        let owner = Position::default();

        memory.sense(near, &Position::new(1.0, 0.0, 0.0), true, 1.0);
        memory.sense(near, &Position::new(1.0, 0.0, 0.0), false, 2.0);
        memory.sense(far, &Position::new(5.0, 0.0, 0.0), true, 2.0);

        let mut targeting = TargetSystem::new();
        targeting.update(&owner, &memory, 3.0);
        assert_eq!(targeting.target(), Some(far));
        assert!(targeting.is_target_shootable(&memory));
    }

    #[test]
    fn test_target_nearest_visible_wins() {
        let mut memory = MemorySystem::new(100.0);
        let near = EntityId(1);
        let far = EntityId(2);
        memory.sense(far, &Position::new(9.0, 0.0, 0.0), true, 1.0);
        memory.sense(near, &Position::new(2.0, 0.0, 0.0), true, 1.0);

        let mut targeting = TargetSystem::new();
        targeting.update(&Position::default(), &memory, 2.0);
        assert_eq!(targeting.target(), Some(near));
    }

    #[test]
    fn test_target_most_recent_invisible_wins() {
        let mut memory = MemorySystem::new(100.0);
        let stale = EntityId(1);
        let fresh = EntityId(2);
        memory.sense(stale, &Position::new(1.0, 0.0, 0.0), true, 1.0);
        memory.sense(stale, &Position::new(1.0, 0.0, 0.0), false, 2.0);
        memory.sense(fresh, &Position::new(50.0, 0.0, 0.0), true, 5.0);
        memory.sense(fresh, &Position::new(50.0, 0.0, 0.0), false, 6.0);

        let mut targeting = TargetSystem::new();
        targeting.update(&Position::default(), &memory, 7.0);
        assert_eq!(targeting.target(), Some(fresh));
        assert!(!targeting.is_target_shootable(&memory));
    }

    #[test]
    fn test_target_sentinels_without_target() {
        let memory = MemorySystem::new(10.0);
        let mut targeting = TargetSystem::new();
        targeting.update(&Position::default(), &memory, 0.0);
        assert!(!targeting.has_target());
        assert_eq!(targeting.time_last_sensed(&memory), -1.0);
        assert_eq!(targeting.time_became_visible(&memory), -1.0);
        assert!(targeting.last_sensed_position(&memory).is_none());
    }

    // ---- Vision ----

    #[test]
    fn test_vision_distance_gate_is_half_squared_range() {
        let vision = Vision::new(std::f64::consts::PI, 20.0);
        let origin = Position::default();
        let facing = glam::DVec3::Y;

        // Inside range/sqrt(2): visible on a clear surface.
        let near = Position::new(0.0, 14.0, 0.0);
        assert!(vision.check_field_of_view(&OpenNav, &origin, facing, &near));

        // Just past range/sqrt(2) (~14.14): rejected despite clear LOS.
        let past_gate = Position::new(0.0, 14.3, 0.0);
        assert!(!vision.check_field_of_view(&OpenNav, &origin, facing, &past_gate));

        // At nominal range: squared distance exceeds range^2/2, rejected.
        let at_range = Position::new(0.0, 20.0, 0.0);
        assert!(!vision.check_field_of_view(&OpenNav, &origin, facing, &at_range));
    }

    #[test]
    fn test_vision_cone_gate() {
        // 90-degree cone facing north: a target due east is outside.
        let vision = Vision::new(std::f64::consts::FRAC_PI_2, 20.0);
        let origin = Position::default();
        let facing = glam::DVec3::Y;

        let side = Position::new(5.0, 0.0, 0.0);
        assert!(!vision.check_field_of_view(&OpenNav, &origin, facing, &side));

        let ahead = Position::new(0.0, 5.0, 0.0);
        assert!(vision.check_field_of_view(&OpenNav, &origin, facing, &ahead));
    }

    #[test]
    fn test_vision_occlusion_blocks() {
        let vision = Vision::new(std::f64::consts::PI, 20.0);
        let origin = Position::default();
        let target = Position::new(0.0, 5.0, 0.0);
        assert!(!vision.check_field_of_view(&OccludedNav, &origin, glam::DVec3::Y, &target));
        assert!(!vision.can_see(&OccludedNav, &origin, &target));
    }

    // ---- Fuzzy weapon scoring ----

    #[test]
    fn test_fuzzy_shotgun_rules_close_vs_far() {
        let weapons = make_full_loadout();
        let close = weapons.weapon_desirability(WeaponKind::Shotgun, 5.0);
        let far = weapons.weapon_desirability(WeaponKind::Shotgun, 60.0);
        assert!(
            close > far,
            "shotgun should prefer close range: close={close} far={far}"
        );

        let rifle_far = weapons.weapon_desirability(WeaponKind::AssaultRifle, 60.0);
        assert!(
            rifle_far > far,
            "rifle should beat shotgun at range: rifle={rifle_far} shotgun={far}"
        );
    }

    #[test]
    fn test_fuzzy_empty_clip_short_circuits_to_zero() {
        let mut weapons = make_full_loadout();
        if let Some(rifle) = weapons.weapon_mut(WeaponKind::AssaultRifle) {
            rifle.rounds_left = 0;
            rifle.ammo = 0;
        }
        assert_eq!(weapons.weapon_desirability(WeaponKind::AssaultRifle, 20.0), 0.0);
        assert_eq!(weapons.weapon_desirability(WeaponKind::AssaultRifle, 3.0), 0.0);
    }

    fn make_full_loadout() -> WeaponSystem {
        let mut weapons = WeaponSystem::new(REACTION_TIME, AIM_ACCURACY);
        weapons.add_weapon(WeaponKind::Shotgun);
        weapons.add_weapon(WeaponKind::AssaultRifle);
        weapons
    }

    // ---- Feature scoring ----

    #[test]
    fn test_total_weapon_strength_counts_missing_kinds_as_zero() {
        // Fresh system holds only the blaster at full reserve.
        let weapons = WeaponSystem::new(REACTION_TIME, AIM_ACCURACY);
        let strength = crate::features::total_weapon_strength(&weapons);
        assert!((strength - 1.0 / 3.0).abs() < 1e-12);

        assert_eq!(
            crate::features::individual_weapon_strength(&weapons, WeaponKind::Shotgun),
            0.0
        );
        assert_eq!(
            crate::features::individual_weapon_strength(&weapons, WeaponKind::Blaster),
            1.0
        );
    }

    #[test]
    fn test_distance_to_item_feature() {
        let origin = Position::default();

        let none = FixedItems(Vec::new());
        assert_eq!(
            crate::features::distance_to_item(&origin, ItemKind::HealthPack, &none),
            1.0
        );

        // Right next to the pack: clamped to the minimum range.
        let near = FixedItems(vec![health_pack(1, Position::new(0.5, 0.0, 0.0), true)]);
        assert!(
            (crate::features::distance_to_item(&origin, ItemKind::HealthPack, &near)
                - MIN_ITEM_RANGE / MAX_ITEM_RANGE)
                .abs()
                < 1e-12
        );

        // Far beyond the window: clamps to 1.0. Inactive packs are unseen.
        let far = FixedItems(vec![health_pack(2, Position::new(500.0, 0.0, 0.0), true)]);
        assert_eq!(
            crate::features::distance_to_item(&origin, ItemKind::HealthPack, &far),
            1.0
        );
        let inactive = FixedItems(vec![health_pack(3, Position::new(3.0, 0.0, 0.0), false)]);
        assert_eq!(
            crate::features::distance_to_item(&origin, ItemKind::HealthPack, &inactive),
            1.0
        );
    }

    // ---- Weapon system state machine ----

    #[test]
    fn test_weapon_system_reset() {
        let mut weapons = make_full_loadout();
        weapons.reset();
        assert_eq!(weapons.weapons().len(), 1);
        assert_eq!(weapons.current_kind(), WeaponKind::Blaster);
        // Reset skips the equip transition for the starting weapon.
        assert_eq!(weapons.current_weapon().status, WeaponStatus::Ready);
        assert!(weapons.next_pending().is_none());
    }

    #[test]
    fn test_weapon_change_same_kind_is_noop() {
        let mut weapons = make_full_loadout();
        weapons.set_next_weapon(WeaponKind::Blaster);
        assert!(weapons.next_pending().is_none());
    }

    #[test]
    fn test_weapon_change_completes_after_hide_and_equip() {
        let mut weapons = make_full_loadout();
        weapons.set_next_weapon(WeaponKind::Shotgun);
        assert_eq!(weapons.next_pending(), Some(WeaponKind::Shotgun));

        // Tick well past hide + equip durations.
        let mut now = 0.0;
        for _ in 0..120 {
            now += DT;
            weapons.update(now);
        }
        assert_eq!(weapons.current_kind(), WeaponKind::Shotgun);
        assert_eq!(weapons.current_weapon().status, WeaponStatus::Ready);
        assert!(weapons.next_pending().is_none());

        // The blaster went through hide and is now holstered.
        assert_eq!(
            weapons.weapon(WeaponKind::Blaster).unwrap().status,
            WeaponStatus::Unready
        );
    }

    #[test]
    fn test_shoot_dispatch_by_status() {
        let mut weapons = make_full_loadout();
        let origin = Position::default();
        let target = Position::new(0.0, 5.0, 0.0);

        // Ready: fires and enters Shot.
        let request = weapons.shoot(0.0, origin, target);
        assert!(request.is_some());
        assert_eq!(weapons.current_weapon().status, WeaponStatus::Shot);

        // Shot (cooldown): silently dropped.
        assert!(weapons.shoot(0.01, origin, target).is_none());
    }

    #[test]
    fn test_empty_clip_triggers_reload() {
        let mut weapons = make_full_loadout();
        let origin = Position::default();
        let target = Position::new(0.0, 5.0, 0.0);

        if let Some(w) = weapons.weapon_mut(WeaponKind::Blaster) {
            w.rounds_left = 1;
        }
        let mut now = 0.0;
        assert!(weapons.shoot(now, origin, target).is_some());
        // Resolve the Shot timer: clip empty, reserve remains -> Empty.
        for _ in 0..60 {
            now += DT;
            weapons.update(now);
        }
        assert_eq!(weapons.current_weapon().status, WeaponStatus::Empty);

        // Shooting while Empty starts a reload instead.
        assert!(weapons.shoot(now, origin, target).is_none());
        assert_eq!(weapons.current_weapon().status, WeaponStatus::Reload);

        for _ in 0..120 {
            now += DT;
            weapons.update(now);
        }
        assert_eq!(weapons.current_weapon().status, WeaponStatus::Ready);
        let blaster = weapons.weapon(WeaponKind::Blaster).unwrap();
        assert_eq!(blaster.rounds_left, blaster.profile.rounds_per_clip);
    }

    #[test]
    fn test_select_best_weapon_applies_change_cost() {
        let mut weapons = make_full_loadout();
        // At point-blank range the shotgun outscores the blaster by more
        // than the change cost, so a change is requested.
        weapons.select_best_weapon(3.0);
        assert_eq!(weapons.next_pending(), Some(WeaponKind::Shotgun));
    }

    #[test]
    fn test_add_rounds_clamps_to_max() {
        let mut weapons = make_full_loadout();
        let blaster = weapons.weapon_mut(WeaponKind::Blaster).unwrap();
        blaster.ammo = 10;
        blaster.add_rounds(10_000);
        assert_eq!(blaster.ammo, blaster.profile.max_ammo);
    }

    #[test]
    fn test_target_reset_clears_current() {
        let mut memory = MemorySystem::new(100.0);
        let e = EntityId(1);
        memory.sense(e, &Position::new(1.0, 0.0, 0.0), true, 1.0);

        let mut targeting = TargetSystem::new();
        targeting.update(&Position::default(), &memory, 1.0);
        assert!(targeting.has_target());
        targeting.reset();
        assert!(!targeting.has_target());
    }

    // ---- Aim and fire ----

    #[test]
    fn test_aim_and_shot_waits_for_reaction_time() {
        let mut bot = Bot::new(EntityId(1), Position::default());
        let enemy = EntityId(2);
        let enemy_pos = Position::new(0.0, 5.0, 0.0);
        bot.body.heading = glam::DVec3::Y;
        bot.memory.sense(enemy, &enemy_pos, true, 10.0);
        bot.targeting.update(&bot.body.position, &bot.memory, 10.0);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // Just became visible: inside reaction time, no shot.
        let shot = update_aim_and_shot(
            &mut bot.body,
            &mut bot.weapons,
            &bot.targeting,
            &bot.memory,
            None,
            10.1,
            DT,
            &mut rng,
        );
        assert!(shot.is_none());

        // Past the reaction time and aligned: fire.
        let shot = update_aim_and_shot(
            &mut bot.body,
            &mut bot.weapons,
            &bot.targeting,
            &bot.memory,
            None,
            10.0 + REACTION_TIME + 0.01,
            DT,
            &mut rng,
        );
        assert!(shot.is_some());
        let request = shot.unwrap();
        assert_eq!(request.weapon, WeaponKind::Blaster);
        // Noise is scaled down at 5m; the aim point stays near the target.
        assert!(request.target.range_to(&enemy_pos) <= AIM_ACCURACY * 2.0);
    }

    // ---- Combat FSM ----

    #[test]
    fn test_fsm_transitions() {
        let mut fsm = CombatFsm::new();
        assert_eq!(fsm.state(), BotState::Exploring);

        fsm.dispatch(BotEvent::EnemySpotted);
        assert_eq!(fsm.state(), BotState::Attacking(AttackState::Pursuing));

        fsm.dispatch(BotEvent::DodgeOn);
        assert!(fsm.is_dodging);

        fsm.dispatch(BotEvent::Run);
        assert_eq!(fsm.state(), BotState::Attacking(AttackState::Retreating));

        fsm.dispatch(BotEvent::EnemyLost);
        assert_eq!(fsm.state(), BotState::Exploring);
        assert!(!fsm.is_dodging, "losing the enemy ends the dodge");

        fsm.dispatch(BotEvent::Hunt);
        assert_eq!(fsm.state(), BotState::Moving);
        fsm.dispatch(BotEvent::PointReached);
        assert_eq!(fsm.state(), BotState::Exploring);
    }

    #[test]
    fn test_fsm_dead_is_terminal() {
        let mut fsm = CombatFsm::new();
        fsm.dispatch(BotEvent::Kill);
        assert_eq!(fsm.state(), BotState::Dead);
        fsm.dispatch(BotEvent::EnemySpotted);
        assert_eq!(fsm.state(), BotState::Dead);
    }

    // ---- Path planner ----

    #[test]
    fn test_planner_defers_results_to_drain() {
        let mut planner = PathPlanner::new();
        let id = planner.submit(Position::default(), Position::new(5.0, 5.0, 0.0));
        assert!(planner.poll(id).is_none(), "no result before drain");

        planner.drain(&OpenNav);
        let result = planner.poll(id);
        assert!(matches!(result, Some(Some(_))));
        assert!(planner.poll(id).is_none(), "results are claimed once");
    }

    #[test]
    fn test_planner_cancel_discards_stale_result() {
        let mut planner = PathPlanner::new();
        let id = planner.submit(Position::default(), Position::new(5.0, 5.0, 0.0));
        planner.drain(&OpenNav);
        // Goal superseded after the result was computed.
        planner.cancel(id);
        assert!(planner.poll(id).is_none(), "cancelled results never surface");
    }

    #[test]
    fn test_planner_reports_unreachable() {
        let mut planner = PathPlanner::new();
        let id = planner.submit(Position::default(), Position::new(5.0, 5.0, 0.0));
        planner.drain(&OccludedNav);
        assert!(matches!(planner.poll(id), Some(None)));
    }

    // ---- Goal composite semantics ----

    #[test]
    fn test_composite_executes_front_goal_only() {
        let mut bot = Bot::new(EntityId(1), Position::default());
        let mut planner = PathPlanner::new();
        let items = FixedItems(Vec::new());

        // Two seek goals: the first completes instantly (target is the
        // spawn position), the second points far away.
        let mut subgoals = std::collections::VecDeque::new();
        subgoals.push_back(GoalNode::seek_to(Position::default()));
        subgoals.push_back(GoalNode::seek_to(Position::new(50.0, 0.0, 0.0)));

        with_mind(&mut bot, &OpenNav, &items, &mut planner, 0.0, |mind, ctx| {
            // Tick 1: only the front goal runs; it completes but stays
            // queued until the next tick's sweep.
            let status = run_subgoals(&mut subgoals, mind, ctx);
            assert_eq!(status, GoalStatus::Active);
            assert_eq!(subgoals.len(), 2);
            assert_eq!(subgoals[0].status, GoalStatus::Completed);
            assert_eq!(subgoals[1].status, GoalStatus::Inactive);

            // Tick 2: the finished front is terminated and removed, and
            // the former second goal becomes the running front.
            let status = run_subgoals(&mut subgoals, mind, ctx);
            assert_eq!(status, GoalStatus::Active);
            assert_eq!(subgoals.len(), 1);
            assert_eq!(subgoals[0].status, GoalStatus::Active);
        });
    }

    #[test]
    fn test_composite_completes_when_drained() {
        let mut bot = Bot::new(EntityId(1), Position::default());
        let mut planner = PathPlanner::new();
        let items = FixedItems(Vec::new());

        let mut subgoals = std::collections::VecDeque::new();
        subgoals.push_back(GoalNode::seek_to(Position::default()));
        subgoals.push_back(GoalNode::seek_to(Position::default()));

        with_mind(&mut bot, &OpenNav, &items, &mut planner, 0.0, |mind, ctx| {
            assert_eq!(run_subgoals(&mut subgoals, mind, ctx), GoalStatus::Active);
            assert_eq!(run_subgoals(&mut subgoals, mind, ctx), GoalStatus::Completed);
        });
    }

    // ---- Hunt: give up at the last-known position ----

    #[test]
    fn test_hunt_forgets_target_after_reaching_last_position() {
        let mut bot = Bot::new(EntityId(1), Position::default());
        let enemy = EntityId(2);
        let last_seen = Position::new(4.0, 0.0, 0.0);
        bot.memory.sense(enemy, &last_seen, true, 1.0);
        bot.memory.sense(enemy, &last_seen, false, 2.0);
        bot.targeting.update(&bot.body.position, &bot.memory, 2.0);
        assert_eq!(bot.targeting.target(), Some(enemy));

        let mut planner = PathPlanner::new();
        let items = FixedItems(Vec::new());
        let mut hunt = GoalNode::hunt();

        // Tick 1: hunt activates, find-path submits its request.
        with_mind(&mut bot, &OpenNav, &items, &mut planner, 2.0, |mind, ctx| {
            hunt.process(mind, ctx);
        });
        planner.drain(&OpenNav);

        // Tick 2: find-path resolves.
        with_mind(&mut bot, &OpenNav, &items, &mut planner, 2.1, |mind, ctx| {
            hunt.process(mind, ctx);
        });

        // Teleport to the last-known position (the sim's movement system
        // would walk there) and let follow-path + hunt finish.
        bot.body.position = last_seen;
        for tick in 0..4 {
            let now = 2.2 + tick as f64 * 0.1;
            with_mind(&mut bot, &OpenNav, &items, &mut planner, now, |mind, ctx| {
                hunt.process(mind, ctx);
            });
        }

        assert_eq!(hunt.status, GoalStatus::Completed);
        assert!(
            !bot.memory.has_record(enemy),
            "giving up the search forgets the target"
        );
        assert!(!bot.targeting.has_target());
    }

    // ---- Evaluators / arbitration ----

    #[test]
    fn test_low_health_installs_get_item_goal() {
        let mut bot = Bot::new(EntityId(1), Position::default());
        bot.body.health = 40.0;
        bot.body.region = Some(0);
        let mut planner = PathPlanner::new();
        let items = FixedItems(vec![health_pack(10, Position::new(5.0, 0.0, 0.0), true)]);

        // The brain is arbitrated outside the mind view, exactly as the
        // engine's brain system does it.
        let mut brain = std::mem::replace(&mut bot.brain, crate::brain::Brain::new());
        with_mind(&mut bot, &OpenNav, &items, &mut planner, 0.0, |mind, ctx| {
            brain.arbitrate(mind, ctx);
            assert_eq!(brain.top_kind(), Some(GoalKind::GetItem));
        });
        bot.brain = brain;
    }

    #[test]
    fn test_attack_evaluator_requires_target() {
        let mut bot = Bot::new(EntityId(1), Position::default());
        bot.body.region = Some(0);
        let mut planner = PathPlanner::new();
        let items = FixedItems(Vec::new());

        let mut brain = std::mem::replace(&mut bot.brain, crate::brain::Brain::new());
        with_mind(&mut bot, &OpenNav, &items, &mut planner, 0.0, |mind, ctx| {
            brain.arbitrate(mind, ctx);
            // No target, healthy, no visible pack: exploring wins.
            assert_eq!(brain.top_kind(), Some(GoalKind::Explore));
        });
        bot.brain = brain;

        // Give the bot a visible target; attack should take over
        // (weapon strength and health are both high).
        let enemy = EntityId(2);
        bot.memory
            .sense(enemy, &Position::new(0.0, 5.0, 0.0), true, 1.0);
        bot.targeting.update(&bot.body.position, &bot.memory, 1.0);

        let mut brain = std::mem::replace(&mut bot.brain, crate::brain::Brain::new());
        with_mind(&mut bot, &OpenNav, &items, &mut planner, 1.0, |mind, ctx| {
            brain.arbitrate(mind, ctx);
            assert_eq!(brain.top_kind(), Some(GoalKind::Attack));
        });
        bot.brain = brain;
    }
}
