#[cfg(test)]
mod integration_tests {
    use std::collections::VecDeque;
    use std::sync::Arc;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{
        validate, validate_with, Ancestry, DagRules, DagStore, SapEngine, SapParams, ValidatedDag,
        VertexId,
    };

    const SIX: [(VertexId, VertexId); 6] = [(1, 0), (2, 1), (0, 3), (2, 4), (3, 4), (3, 5)];

    const TWELVE: [(VertexId, VertexId); 11] = [
        (10, 9), (11, 9), (8, 5), (9, 5), (5, 1), (4, 1), (7, 3), (6, 3), (3, 1), (1, 0), (2, 0),
    ];

    const FOREST: DagRules = DagRules { require_single_root: false };

    fn dag(vertex_count: usize, edges: &[(VertexId, VertexId)], rules: &DagRules) -> Arc<ValidatedDag> {
        let store = DagStore::from_edges(vertex_count, edges.iter().copied()).unwrap();
        Arc::new(validate_with(&store, rules).unwrap())
    }

    /// Random single-rooted DAG: every vertex above 0 points to one to three
    /// lower-numbered vertices.
    fn random_dag(rng: &mut StdRng, vertex_count: usize) -> DagStore {
        let mut store = DagStore::new(vertex_count);
        for v in 1..vertex_count {
            for _ in 0..rng.gen_range(1..=3usize.min(v)) {
                store.add_edge(v, rng.gen_range(0..v)).unwrap();
            }
        }
        store
    }

    fn random_set(rng: &mut StdRng, vertex_count: usize) -> Vec<VertexId> {
        (0..rng.gen_range(1..=3)).map(|_| rng.gen_range(0..vertex_count)).collect()
    }

    fn bfs(store: &DagStore, seeds: &[VertexId]) -> Vec<Option<u32>> {
        let mut dist = vec![None; store.vertex_count()];
        let mut queue = VecDeque::new();
        for &s in seeds {
            if dist[s].is_none() {
                dist[s] = Some(0);
                queue.push_back(s);
            }
        }
        while let Some(v) = queue.pop_front() {
            let d = dist[v].unwrap();
            for w in store.neighbors(v).unwrap() {
                if dist[w].is_none() {
                    dist[w] = Some(d + 1);
                    queue.push_back(w);
                }
            }
        }
        dist
    }

    /// Two full searches and a scan over every vertex.
    fn brute_force_length(store: &DagStore, sources: &[VertexId], targets: &[VertexId]) -> Option<u32> {
        let from_sources = bfs(store, sources);
        let from_targets = bfs(store, targets);
        from_sources
            .iter()
            .zip(&from_targets)
            .filter_map(|(a, b)| Some((*a)? + (*b)?))
            .min()
    }

    #[test]
    fn test_six_vertex_fixture() {
        let mut sap = SapEngine::new(dag(6, &SIX, &FOREST), 16);
        assert_eq!(sap.length_between(2, 0), Ok(Some(2)));
        assert_eq!(sap.ancestor_between(2, 0), Ok(Some(0)));

        // 4 and 5 are both sinks, 1 and 3 meet at 3
        assert_eq!(sap.ancestry(&[1], &[3]), Ok(Some(Ancestry::new(3, 2))));
        assert_eq!(sap.ancestry(&[4], &[5]), Ok(None));
    }

    #[test]
    fn test_twelve_vertex_fixture() {
        let mut sap = SapEngine::new(dag(12, &TWELVE, &DagRules::default()), 32);
        assert_eq!(sap.ancestor(&[3, 7, 6, 1], &[10, 11, 2]), Ok(Some(0)));
        assert_eq!(sap.length(&[3, 7, 6, 1], &[10, 11, 2]), Ok(Some(2)));

        assert_eq!(sap.ancestry(&[10], &[8]), Ok(Some(Ancestry::new(5, 3))));
        assert_eq!(sap.ancestry(&[6], &[11]), Ok(Some(Ancestry::new(1, 5))));
        assert_eq!(sap.ancestry(&[4], &[2]), Ok(Some(Ancestry::new(0, 3))));
    }

    #[test]
    fn test_symmetry_and_identity_exhaustive() {
        let dag = dag(12, &TWELVE, &DagRules::default());
        // no cache so every call runs a fresh search in both orders
        let mut sap = SapEngine::new(dag, 0);
        for v in 0..12 {
            assert_eq!(sap.ancestry(&[v], &[v]), Ok(Some(Ancestry::new(v, 0))));
            for w in 0..12 {
                let forward = sap.ancestry(&[v], &[w]).unwrap();
                let backward = sap.ancestry(&[w], &[v]).unwrap();
                assert_eq!(forward, backward, "asymmetric result for {v} and {w}");
                assert!(forward.is_some(), "single root reaches every pair");
            }
        }
        assert_eq!(sap.cache_stats().hits, 0);
    }

    #[test]
    fn test_repeated_query_hits_cache() {
        let mut sap = SapEngine::with_params(dag(12, &TWELVE, &DagRules::default()), &SapParams::default());
        let first = sap.ancestry(&[3, 7, 6, 1], &[10, 11, 2]).unwrap();
        assert_eq!(sap.cache_stats().misses, 1);

        // reordered, duplicated and swapped sets land on the same slot
        assert_eq!(sap.ancestry(&[3, 7, 6, 1], &[10, 11, 2]).unwrap(), first);
        assert_eq!(sap.ancestry(&[1, 6, 7, 3, 3], &[2, 11, 10]).unwrap(), first);
        assert_eq!(sap.ancestry(&[10, 11, 2], &[3, 7, 6, 1]).unwrap(), first);

        let stats = sap.cache_stats();
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.len, 1);
    }

    #[test]
    fn test_cache_evicts_least_recently_used_query() {
        let mut sap = SapEngine::new(dag(12, &TWELVE, &DagRules::default()), 2);
        sap.length_between(10, 8).unwrap();
        sap.length_between(6, 11).unwrap();
        // refresh the first pair, then push a third one in
        sap.length_between(10, 8).unwrap();
        sap.length_between(4, 2).unwrap();

        let before = sap.cache_stats();
        assert_eq!(before.evictions, 1);
        sap.length_between(10, 8).unwrap();
        assert_eq!(sap.cache_stats().hits, before.hits + 1);
        sap.length_between(6, 11).unwrap();
        assert_eq!(sap.cache_stats().misses, before.misses + 1);
    }

    #[test]
    fn test_disconnected_forest_has_no_path() {
        // two separate hierarchies: {1, 2} -> 0 and {4} -> 3
        let mut sap = SapEngine::new(dag(5, &[(1, 0), (2, 0), (4, 3)], &FOREST), 8);
        assert_eq!(sap.length(&[1, 2], &[4]), Ok(None));
        assert_eq!(sap.ancestor(&[1, 2], &[4]), Ok(None));
        assert_eq!(sap.ancestor(&[4], &[1, 2]), Ok(None));
        // a set straddling both trees still meets the other side
        assert_eq!(sap.ancestry(&[1, 4], &[3]), Ok(Some(Ancestry::new(3, 1))));
    }

    #[test]
    fn test_stale_scratch_never_leaks_between_queries() {
        // long chain: 0 <- 1 <- ... <- 49, plus a side branch 50 -> 0
        let mut edges: Vec<_> = (1..50).map(|v| (v, v - 1)).collect();
        edges.push((50, 0));
        let mut sap = SapEngine::new(dag(51, &edges, &DagRules::default()), 0);

        // a wide query followed by a narrow one exercises the dirty-list reset
        assert_eq!(sap.length_between(49, 50), Ok(Some(50)));
        assert_eq!(sap.length_between(3, 2), Ok(Some(1)));
        assert_eq!(sap.length_between(49, 50), Ok(Some(50)));
        assert_eq!(sap.ancestor_between(25, 50), Ok(Some(0)));
    }

    #[test]
    fn test_matches_brute_force_on_random_dags() {
        let mut rng = StdRng::seed_from_u64(0x5a9);
        for _ in 0..40 {
            let vertex_count = rng.gen_range(2..40);
            let store = random_dag(&mut rng, vertex_count);
            let dag = Arc::new(validate(&store).unwrap());
            let mut cached = SapEngine::new(dag.clone(), 16);
            let mut uncached = SapEngine::new(dag, 0);

            for _ in 0..50 {
                let sources = random_set(&mut rng, vertex_count);
                let targets = random_set(&mut rng, vertex_count);
                let expected = brute_force_length(&store, &sources, &targets);

                let forward = uncached.ancestry(&sources, &targets).unwrap();
                let backward = uncached.ancestry(&targets, &sources).unwrap();
                assert_eq!(forward.map(|a| a.length), expected);
                assert_eq!(forward, backward);
                assert_eq!(cached.ancestry(&sources, &targets).unwrap(), forward);

                // the reported ancestor really sits at the reported distance
                if let Some(Ancestry { ancestor, length }) = forward {
                    let a = bfs(&store, &sources)[ancestor].unwrap();
                    let b = bfs(&store, &targets)[ancestor].unwrap();
                    assert_eq!(a + b, length);
                }
            }
        }
    }
}
