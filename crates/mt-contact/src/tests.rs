//! Unit tests for mt-contact.

use mt_core::{AgentId, ConfigError, SimRng, Tick};

use crate::{Contact, ContactError, ContactModel, pair_count};

// ── Helpers ───────────────────────────────────────────────────────────────────

const SEED: u64 = 0xbb_bbbb;

fn a(i: usize) -> AgentId {
    AgentId::from_index(i)
}

fn c(i: usize, j: usize) -> Contact {
    Contact::new(a(i), a(j)).unwrap()
}

/// Sorted, no self-pairs, no duplicates, endpoints inside the population.
fn assert_well_formed(contacts: &[Contact], agent_count: usize) {
    for w in contacts.windows(2) {
        assert!(w[0] < w[1], "unsorted or duplicated: {} then {}", w[0], w[1]);
    }
    for contact in contacts {
        assert!(contact.low() < contact.high());
        assert!(contact.high().index() < agent_count, "{contact} outside population");
    }
}

/// Run `ticks` ticks, checking each list, and return them all.
fn run<M: ContactModel>(model: &mut M, ticks: usize) -> Vec<Vec<Contact>> {
    let n = model.agent_count();
    (0..ticks)
        .map(|_| {
            let contacts = model.advance().unwrap();
            assert_well_formed(&contacts, n);
            contacts
        })
        .collect()
}

// ── Contact ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod contact {
    use super::*;
    use crate::pairs;

    #[test]
    fn canonical_order() {
        let x = Contact::new(a(7), a(2)).unwrap();
        assert_eq!(x.as_pair(), (a(2), a(7)));
        assert_eq!(x, c(2, 7));
        assert!(x.involves(a(7)) && !x.involves(a(3)));
        assert_eq!(x.to_string(), "(2, 7)");
    }

    #[test]
    fn self_pair_rejected() {
        assert!(Contact::new(a(4), a(4)).is_none());
    }

    #[test]
    fn sort_is_lexicographic() {
        let mut v = vec![c(1, 3), c(0, 5), c(1, 2), c(0, 1)];
        v.sort();
        assert_eq!(v, vec![c(0, 1), c(0, 5), c(1, 2), c(1, 3)]);
    }

    #[test]
    fn pairs_enumerates_upper_triangle() {
        let all: Vec<Contact> = pairs(4).collect();
        assert_eq!(all, vec![c(0, 1), c(0, 2), c(0, 3), c(1, 2), c(1, 3), c(2, 3)]);
        assert_eq!(pair_count(4), 6);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pairs(1).count(), 0);
    }
}

// ── Random graphs ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod graphs {
    use super::*;
    use crate::{DynamicGnm, DynamicGnp, EdgeMarkovian, RandomContact, pairs};

    #[test]
    fn gnp_one_is_complete() {
        let mut g = DynamicGnp::new(12, 1.0, SimRng::new(SEED)).unwrap();
        let complete: Vec<Contact> = pairs(12).collect();
        for contacts in run(&mut g, 20) {
            assert_eq!(contacts, complete);
        }
    }

    #[test]
    fn gnp_zero_is_empty() {
        let mut g = DynamicGnp::new(12, 0.0, SimRng::new(SEED)).unwrap();
        assert!(run(&mut g, 20).iter().all(Vec::is_empty));
        assert_eq!(g.tick(), Tick(20));
    }

    #[test]
    fn gnp_density_near_p() {
        let mut g = DynamicGnp::new(50, 0.2, SimRng::new(SEED)).unwrap();
        let total: usize = run(&mut g, 100).iter().map(Vec::len).sum();
        let density = total as f64 / (100 * pair_count(50)) as f64;
        assert!((density - 0.2).abs() < 0.01, "density {density}");
    }

    #[test]
    fn gnp_rejects_bad_probability() {
        assert!(matches!(
            DynamicGnp::new(10, 1.5, SimRng::new(0)),
            Err(ContactError::Config(ConfigError::OutOfRange { param: "p", .. }))
        ));
        assert!(matches!(
            DynamicGnp::new(0, 0.5, SimRng::new(0)),
            Err(ContactError::Config(ConfigError::EmptyPopulation))
        ));
    }

    #[test]
    fn gnm_has_exactly_m_distinct_edges() {
        let mut g = DynamicGnm::new(30, 40, SimRng::new(SEED)).unwrap();
        for contacts in run(&mut g, 200) {
            assert_eq!(contacts.len(), 40);
        }
    }

    #[test]
    fn gnm_can_fill_the_graph() {
        let mut g = DynamicGnm::new(6, 15, SimRng::new(SEED)).unwrap();
        let complete: Vec<Contact> = pairs(6).collect();
        assert_eq!(run(&mut g, 5)[4], complete);
    }

    #[test]
    fn gnm_zero_edges() {
        let mut g = DynamicGnm::new(1, 0, SimRng::new(SEED)).unwrap();
        assert!(g.advance().unwrap().is_empty());
    }

    #[test]
    fn gnm_rejects_too_many_edges() {
        assert_eq!(
            DynamicGnm::new(5, 11, SimRng::new(0)).err(),
            Some(ContactError::Config(ConfigError::TooManyEdges { requested: 11, available: 10 }))
        );
    }

    #[test]
    fn edge_markovian_alternates_when_certain() {
        let mut g = EdgeMarkovian::new(8, 1.0, 1.0, 0.0, SimRng::new(SEED)).unwrap();
        assert_eq!(g.edge_count(), 0);
        let complete: Vec<Contact> = pairs(8).collect();
        for (t, contacts) in run(&mut g, 10).into_iter().enumerate() {
            let tick = t + 1;
            if tick % 2 == 1 {
                assert_eq!(contacts, complete, "tick {tick} should be complete");
            } else {
                assert!(contacts.is_empty(), "tick {tick} should be empty");
            }
        }
    }

    #[test]
    fn edge_markovian_frozen_keeps_initial_graph() {
        let mut g = EdgeMarkovian::new(20, 0.0, 0.0, 0.3, SimRng::new(SEED)).unwrap();
        let initial = g.edge_count();
        let ticks = run(&mut g, 10);
        assert!(ticks.iter().all(|t| t.len() == initial));
        assert!(ticks.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn edge_markovian_rejects_bad_probabilities() {
        for (p, q, g) in [(-0.1, 0.5, 0.5), (0.5, 1.1, 0.5), (0.5, 0.5, 2.0)] {
            assert!(matches!(
                EdgeMarkovian::new(5, p, q, g, SimRng::new(0)),
                Err(ContactError::Config(ConfigError::OutOfRange { .. }))
            ));
        }
    }

    #[test]
    fn random_contact_one_pair_per_tick() {
        let mut g = RandomContact::new(2, SimRng::new(SEED)).unwrap();
        for contacts in run(&mut g, 50) {
            assert_eq!(contacts, vec![c(0, 1)]);
        }
    }

    #[test]
    fn random_contact_needs_two_agents() {
        assert_eq!(
            RandomContact::new(1, SimRng::new(0)).err(),
            Some(ContactError::Config(ConfigError::TooFewAgents { required: 2, got: 1 }))
        );
    }

    #[test]
    fn same_seed_same_graphs() {
        let mut x = DynamicGnm::new(25, 30, SimRng::new(SEED)).unwrap();
        let mut y = DynamicGnm::new(25, 30, SimRng::new(SEED)).unwrap();
        let mut z = DynamicGnm::new(25, 30, SimRng::new(SEED + 1)).unwrap();
        let (tx, ty, tz) = (run(&mut x, 50), run(&mut y, 50), run(&mut z, 50));
        assert_eq!(tx, ty);
        assert_ne!(tx, tz);
    }
}

// ── Continuous edge-Markovian ─────────────────────────────────────────────────

#[cfg(test)]
mod continuous {
    use super::*;
    use crate::{ContinuousEdgeMarkovian, InterContact};

    #[test]
    fn exponential_rate_matches_mean() {
        let mut g = ContinuousEdgeMarkovian::exponential(20, 10.0, SimRng::new(SEED)).unwrap();
        let ticks = run(&mut g, 1_000);
        let per_tick = ticks.iter().map(Vec::len).sum::<usize>() as f64 / 1_000.0;
        // 190 pairs each firing roughly every 10.5 ticks.
        assert!((14.0..22.0).contains(&per_tick), "{per_tick} contacts per tick");
    }

    #[test]
    fn countdowns_never_negative_after_tick() {
        let mut g = ContinuousEdgeMarkovian::exponential(10, 2.0, SimRng::new(SEED)).unwrap();
        for _ in 0..50 {
            g.advance().unwrap();
            assert!(g.countdowns().iter().all(|&c| c >= 0.0));
        }
    }

    #[test]
    fn broad_runs_and_fires() {
        let mut g = ContinuousEdgeMarkovian::broad(10, 1.6, SimRng::new(SEED)).unwrap();
        assert_eq!(g.name(), "broad_edge_markovian");
        assert_eq!(g.law(), InterContact::PowerLaw { alpha: 1.6 });
        let ticks = run(&mut g, 50);
        assert!(ticks.iter().any(|t| !t.is_empty()));
    }

    #[test]
    fn broad_has_heavier_tail() {
        let mut broad = ContinuousEdgeMarkovian::broad(30, 1.5, SimRng::new(SEED)).unwrap();
        let mut exp = ContinuousEdgeMarkovian::exponential(30, 2.0, SimRng::new(SEED)).unwrap();
        run(&mut broad, 100);
        run(&mut exp, 100);
        let long = |g: &ContinuousEdgeMarkovian| g.countdowns().iter().filter(|&&c| c > 100.0).count();
        assert!(long(&broad) > long(&exp));
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(
            ContinuousEdgeMarkovian::exponential(5, 0.0, SimRng::new(0)),
            Err(ContactError::Config(ConfigError::NonPositive { .. }))
        ));
        assert!(matches!(
            ContinuousEdgeMarkovian::broad(5, 1.0, SimRng::new(0)),
            Err(ContactError::Config(ConfigError::OutOfRange { param: "alpha", .. }))
        ));
        assert!(matches!(
            ContinuousEdgeMarkovian::broad(5, f64::NAN, SimRng::new(0)),
            Err(ContactError::Config(ConfigError::OutOfRange { param: "alpha", .. }))
        ));
    }
}

// ── Human contact ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod human {
    use super::*;
    use crate::{Activation, CliqueArena, HumanContact, HyperbolicKernel};

    type ModelB = HumanContact<HyperbolicKernel, HyperbolicKernel>;

    fn model_b(seed: u64) -> ModelB {
        let kernel = HyperbolicKernel::new(100.0).unwrap();
        HumanContact::model_b(100, 0.51, 0.86, 0.95, kernel, kernel, SimRng::new(seed)).unwrap()
    }

    fn always(_: Tick, _: Tick) -> f64 {
        1.0
    }

    /// The emitted list matches the partner maps exactly.
    fn assert_matches_partners<F, P>(model: &HumanContact<F, P>, contacts: &[Contact])
    where
        F: crate::MemoryKernel,
        P: crate::MemoryKernel,
    {
        let mut expected = Vec::new();
        for i in 0..model.agent_count() {
            for &j in model.partners(a(i)).keys() {
                if a(i) < j {
                    expected.push(Contact::new(a(i), j).unwrap());
                }
            }
        }
        expected.sort();
        assert_eq!(contacts, expected.as_slice());
    }

    #[test]
    fn kernel_values() {
        let k = HyperbolicKernel::new(100.0).unwrap();
        use crate::MemoryKernel;
        assert_eq!(k.weight(Tick(5), Tick(5)), 1.0);
        assert_eq!(k.weight(Tick(150), Tick(50)), 0.5);
        let closure = |now: Tick, since: Tick| 1.0 / (1.0 + (now - since) as f64 / 100.0);
        assert_eq!(closure.weight(Tick(300), Tick(0)), k.weight(Tick(300), Tick(0)));
        assert!(HyperbolicKernel::new(0.0).is_err());
    }

    #[test]
    fn model_b_reproducible_over_long_run() {
        let mut x = model_b(SEED);
        let mut y = model_b(SEED);
        for t in 1..=10_000 {
            let cx = x.advance().unwrap();
            let cy = y.advance().unwrap();
            assert_eq!(cx, cy, "diverged at tick {t}");
            if t % 500 == 0 {
                assert_well_formed(&cx, 100);
                assert_matches_partners(&x, &cx);
                x.arena().check().unwrap();
            }
        }
        assert_eq!(x.tick(), Tick(10_000));
        let active = (0..100).filter(|&i| x.is_active(a(i))).count();
        assert_eq!(active + x.inactive_count(), 100);
    }

    #[test]
    fn model_b_trace_at_tick_10000() {
        let mut m = model_b(SEED);
        let contacts = run(&mut m, 10_000).pop().unwrap();
        let expected = vec![
            c(4, 75), c(12, 35), c(17, 57), c(19, 98), c(22, 55), c(24, 52),
            c(38, 41), c(48, 49), c(53, 93), c(67, 86), c(78, 79), c(90, 97),
        ];
        assert_eq!(contacts, expected);
        assert_eq!(m.inactive_count(), 76);
    }

    #[test]
    fn heterogeneous_trace_at_tick_10000() {
        let activity = (0..100).map(|i| 1.0 / (1.0 + i as f64 / 100.0)).collect();
        let kernel = HyperbolicKernel::new(100.0).unwrap();
        let mut m = HumanContact::heterogeneous(activity, 0.86, kernel, kernel, SimRng::new(SEED)).unwrap();
        let contacts = run(&mut m, 10_000).pop().unwrap();
        let expected = vec![
            c(0, 2), c(1, 33), c(3, 95), c(4, 9), c(4, 59), c(4, 67), c(6, 8), c(9, 59),
            c(9, 67), c(11, 42), c(13, 50), c(14, 65), c(16, 24), c(22, 90), c(23, 35),
            c(25, 57), c(26, 82), c(27, 53), c(29, 93), c(30, 39), c(31, 44), c(31, 81),
            c(32, 68), c(34, 87), c(36, 41), c(37, 94), c(38, 60), c(43, 91), c(44, 81),
            c(45, 52), c(46, 48), c(47, 98), c(49, 71), c(51, 62), c(51, 96), c(58, 72),
            c(59, 67), c(61, 69), c(62, 96), c(63, 75), c(64, 66), c(70, 84), c(92, 97),
        ];
        assert_eq!(contacts, expected);
        assert_eq!(m.inactive_count(), 28);
    }

    #[test]
    fn partners_drawn_by_activity() {
        // The first pair of a fresh engine: the initiator is picked in
        // proportion to its activity, its partner likewise among the others.
        let activity = [1.0, 0.1, 0.3, 0.6];
        let total: f64 = activity.iter().sum();
        let runs: u64 = 4_000;
        let mut counts = [[0usize; 4]; 4];
        for seed in 0..runs {
            let mut m = HumanContact::heterogeneous(activity.to_vec(), 0.5, always, always, SimRng::new(seed)).unwrap();
            let first = (0..1_000).map(|_| m.advance().unwrap()).find(|list| !list.is_empty()).unwrap();
            assert_eq!(first.len(), 1);
            let (lo, hi) = first[0].as_pair();
            counts[lo.index()][hi.index()] += 1;
        }
        for i in 0..4 {
            for j in i + 1..4 {
                let (wi, wj) = (activity[i], activity[j]);
                let expected = (wi * wj / (total - wi) + wj * wi / (total - wj)) / total;
                let observed = counts[i][j] as f64 / runs as f64;
                assert!((observed - expected).abs() < 0.025, "pair ({i}, {j}): {observed} vs {expected}");
            }
        }
        assert!(counts[0][1] < counts[0][2] && counts[0][2] < counts[0][3]);
    }

    fn recent(now: Tick, since: Tick) -> f64 {
        1.0 / (1.0 + now.since(since) as f64).powi(2)
    }

    /// Share of newly formed pairs that repeat the previous pair, on three
    /// agents that always act and always leave.
    fn repeat_share<P: crate::MemoryKernel>(pi: P) -> f64 {
        let mut m = HumanContact::model_b(3, 1.0, 1.0, 1.0, always, pi, SimRng::new(SEED)).unwrap();
        let mut previous: Option<Contact> = None;
        let mut alone = true;
        let (mut formed, mut repeated) = (0, 0);
        for _ in 0..20_000 {
            let contacts = m.advance().unwrap();
            match contacts.first() {
                Some(&pair) if alone => {
                    formed += 1;
                    if previous == Some(pair) {
                        repeated += 1;
                    }
                    previous = Some(pair);
                    alone = false;
                }
                Some(_) => {}
                None => alone = true,
            }
        }
        repeated as f64 / formed as f64
    }

    #[test]
    fn recency_kernel_favours_recent_partners() {
        // Uniform weights: only a former member picking its old partner
        // repeats the pair, a third of the time.
        let uniform = repeat_share(always);
        assert!((uniform - 1.0 / 3.0).abs() < 0.04, "uniform {uniform}");
        // The agent that just left outweighs the one alone for longer.
        let favoured = repeat_share(recent);
        assert!(favoured > 0.5, "recency {favoured}");
    }

    #[test]
    fn arena_consistent_every_tick() {
        let mut m = model_b(7);
        for _ in 0..3_000 {
            let contacts = m.advance().unwrap();
            m.arena().check().unwrap();
            assert_matches_partners(&m, &contacts);
        }
        // Groups form: some contacts by the end of a burn-in.
        assert!(m.inactive_count() < 100);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut x = model_b(1);
        let mut y = model_b(2);
        let tx = run(&mut x, 2_000);
        let ty = run(&mut y, 2_000);
        assert_ne!(tx, ty);
    }

    #[test]
    fn two_agents_alternate_with_certain_rates() {
        let mut m = HumanContact::model_b(2, 1.0, 1.0, 1.0, always, always, SimRng::new(SEED)).unwrap();
        for t in 1..=10 {
            let contacts = m.advance().unwrap();
            if t % 2 == 1 {
                assert_eq!(contacts, vec![c(0, 1)], "tick {t}");
                assert_eq!(m.inactive_count(), 0);
                assert_eq!(m.partners(a(0)).get(&a(1)), Some(&Tick(t)));
            } else {
                assert!(contacts.is_empty(), "tick {t}");
                assert_eq!(m.inactive_count(), 2);
                assert_eq!(m.arena().last_change(a(1)), Tick(t));
            }
        }
    }

    #[test]
    fn groups_only_grow_without_departures() {
        let mut m = HumanContact::model_b(20, 1.0, 1.0, 0.0, always, always, SimRng::new(SEED)).unwrap();
        let mut previous: Vec<Contact> = Vec::new();
        for _ in 0..500 {
            let contacts = m.advance().unwrap();
            assert!(previous.iter().all(|p| contacts.binary_search(p).is_ok()));
            m.arena().check().unwrap();
            previous = contacts;
        }
        // Pairing and recruiting both stop once fewer than two agents are alone.
        assert!(m.inactive_count() < 2);
    }

    #[test]
    fn lone_agent_never_pairs() {
        let mut m = HumanContact::model_b(1, 1.0, 1.0, 0.5, always, always, SimRng::new(SEED)).unwrap();
        assert!(run(&mut m, 100).iter().all(Vec::is_empty));
    }

    #[test]
    fn recruits_join_whole_group() {
        let mut arena = CliqueArena::new(5);
        arena.pair_up(a(0), a(1), Tick(1));
        arena.recruit(a(0), a(2), Tick(2));
        arena.recruit(a(2), a(3), Tick(3));
        arena.check().unwrap();
        assert_eq!(arena.contacts(), vec![c(0, 1), c(0, 2), c(0, 3), c(1, 2), c(1, 3), c(2, 3)]);
        assert_eq!(arena.partners(a(1)).get(&a(3)), Some(&Tick(3)));
        assert_eq!(arena.inactive(), &[a(4)]);
    }

    #[test]
    fn leaving_dissolves_pairs() {
        let mut arena = CliqueArena::new(5);
        arena.pair_up(a(0), a(1), Tick(1));
        arena.recruit(a(0), a(2), Tick(2));
        arena.pair_up(a(4), a(3), Tick(2));
        // Agent 2 leaves {0, 1, 2}: the rest stay together.
        assert_eq!(arena.leave(a(2), Tick(3)), 1);
        assert_eq!(arena.contacts(), vec![c(0, 1), c(3, 4)]);
        // Agent 3 leaves {3, 4}: both become inactive.
        assert_eq!(arena.leave(a(3), Tick(4)), 2);
        assert_eq!(arena.contacts(), vec![c(0, 1)]);
        assert_eq!(arena.last_change(a(4)), Tick(4));
        assert_eq!(arena.last_change(a(0)), Tick(2));
        arena.check().unwrap();
        assert_eq!(arena.inactive_count(), 3);
    }

    #[test]
    fn heterogeneous_runs() {
        let activation = Activation::heterogeneous_from_fn(60, |i| 0.2 + 0.7 * (i.index() % 4) as f64 / 3.0);
        let Activation::Heterogeneous { activity } = &activation else {
            panic!("expected heterogeneous activation");
        };
        assert_eq!(activity.len(), 60);
        assert!(activity.iter().all(|x| (0.2..=0.9 + 1e-12).contains(x)));

        let kernel = HyperbolicKernel::new(60.0).unwrap();
        let mut m = HumanContact::new(60, activation, 0.8, kernel, kernel, SimRng::new(SEED)).unwrap();
        assert_eq!(m.name(), "heterogeneous_model_b");
        for _ in 0..2_000 {
            let contacts = m.advance().unwrap();
            assert_well_formed(&contacts, 60);
        }
        m.arena().check().unwrap();
    }

    #[test]
    fn zero_weight_pool_is_a_sampling_error() {
        // Only agent 0 ever acts, and nobody is worth pairing with.
        let activity = vec![1.0, 0.0, 0.0];
        let mut m = HumanContact::heterogeneous(activity, 0.5, always, always, SimRng::new(SEED)).unwrap();
        let err = (0..1_000).find_map(|_| m.advance().err()).expect("agent 0 is eventually picked");
        assert!(matches!(err, ContactError::SamplingDomain { candidates: 3, total_weight, .. } if total_weight == 0.0));
        // The engine stays failed.
        assert_eq!(m.advance().err(), Some(err));
    }

    #[test]
    fn invalid_partner_weight_is_a_sampling_error() {
        fn negative(_: Tick, _: Tick) -> f64 {
            -1.0
        }
        fn undefined(_: Tick, _: Tick) -> f64 {
            f64::NAN
        }
        let mut m = HumanContact::model_b(2, 1.0, 1.0, 0.5, always, negative, SimRng::new(SEED)).unwrap();
        assert!(matches!(m.advance(), Err(ContactError::SamplingDomain { tick: Tick(1), candidates: 2, .. })));
        let mut m = HumanContact::model_b(2, 1.0, 1.0, 0.5, always, undefined, SimRng::new(SEED)).unwrap();
        assert!(matches!(m.advance(), Err(ContactError::SamplingDomain { total_weight, .. }) if total_weight.is_nan()));
    }

    #[test]
    fn rejects_bad_parameters() {
        let k = HyperbolicKernel::new(10.0).unwrap();
        assert!(matches!(
            HumanContact::model_b(10, 1.2, 0.5, 0.5, k, k, SimRng::new(0)),
            Err(ContactError::Config(ConfigError::OutOfRange { param: "b0", .. }))
        ));
        assert!(matches!(
            HumanContact::model_b(10, 0.5, 0.5, -0.1, k, k, SimRng::new(0)),
            Err(ContactError::Config(ConfigError::OutOfRange { param: "mu", .. }))
        ));
        assert!(matches!(
            HumanContact::new(5, Activation::Heterogeneous { activity: vec![0.5; 3] }, 0.5, k, k, SimRng::new(0)),
            Err(ContactError::Config(ConfigError::LengthMismatch { expected: 5, got: 3, .. }))
        ));
        assert!(matches!(
            HumanContact::heterogeneous(vec![], 0.5, k, k, SimRng::new(0)),
            Err(ContactError::Config(ConfigError::EmptyPopulation))
        ));
    }
}

// ── Proximity bridge ──────────────────────────────────────────────────────────

#[cfg(test)]
mod proximity {
    use super::*;
    use crate::{ProximityContacts, indexed_contacts, pairwise_contacts, pairs};
    use mt_core::{Bounds, Point};
    use mt_mobility::{MovementModel, RandomWalkParams, random_walk};

    fn walk(n: usize, side: f64) -> mt_mobility::StochasticWalk {
        let bounds = Bounds::new(side, side).unwrap();
        random_walk(n, bounds, &RandomWalkParams::default(), SimRng::new(SEED)).unwrap()
    }

    #[test]
    fn range_is_strict() {
        let points = [Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(0.0, 2.0)];
        assert_eq!(indexed_contacts(&points, 3.0), vec![c(0, 2)]);
        assert_eq!(indexed_contacts(&points, 3.0 + 1e-9), vec![c(0, 1), c(0, 2)]);
        assert_eq!(pairwise_contacts(&points, 3.0), vec![c(0, 2)]);
    }

    #[test]
    fn coincident_agents_are_in_contact() {
        let points = [Point::new(1.0, 1.0); 3];
        assert_eq!(indexed_contacts(&points, 0.5), vec![c(0, 1), c(0, 2), c(1, 2)]);
    }

    #[test]
    fn index_agrees_with_scan() {
        let mut bridge = ProximityContacts::new(walk(80, 30.0), 4.0).unwrap();
        for _ in 0..200 {
            let contacts = bridge.advance().unwrap();
            assert_well_formed(&contacts, 80);
            assert_eq!(contacts, pairwise_contacts(bridge.positions(), 4.0));
        }
        assert_eq!(bridge.tick(), bridge.model().tick());
        assert_eq!(bridge.tick(), Tick(200));
    }

    #[test]
    fn range_beyond_diagonal_connects_everyone() {
        let mut bridge = ProximityContacts::new(walk(10, 5.0), 100.0).unwrap();
        let complete: Vec<Contact> = pairs(10).collect();
        assert_eq!(bridge.advance().unwrap(), complete);
    }

    #[test]
    fn rejects_non_positive_range() {
        assert!(matches!(
            ProximityContacts::new(walk(5, 10.0), 0.0),
            Err(ContactError::Config(ConfigError::NonPositive { .. }))
        ));
    }

    #[test]
    fn into_inner_returns_model() {
        let mut bridge = ProximityContacts::new(walk(5, 10.0), 1.0).unwrap();
        run(&mut bridge, 3);
        let model = bridge.into_inner();
        assert_eq!(model.tick(), Tick(3));
        assert_eq!(model.agent_count(), 5);
    }
}
