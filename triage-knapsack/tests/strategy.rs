use triage_knapsack::*;

#[test]
fn test_parse_strategy() {
    assert_eq!("recursive".parse::<Strategy>().unwrap(), Strategy::Recursive);
    assert_eq!("memoized".parse::<Strategy>().unwrap(), Strategy::Memoized);
    assert_eq!("tabulated".parse::<Strategy>().unwrap(), Strategy::Tabulated);
    assert!("greedy".parse::<Strategy>().is_err());
    for strategy in Strategy::ALL {
        assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
    }
}

#[test]
fn test_solve_example_with_every_strategy() {
    let instance = Instance::example();
    for strategy in Strategy::ALL {
        let selection = solve(&instance, strategy).unwrap();
        assert_eq!(selection.optimal_value, 100, "{}", strategy);
        assert_eq!(selection.items, vec![2, 4], "{}", strategy);
    }
}

#[test]
fn test_solve_ties() {
    let instance = Instance::from_pairs(&[(10, 5), (10, 5)], 10).unwrap();
    assert_eq!(solve(&instance, Strategy::Recursive).unwrap().items, vec![1]);
    assert_eq!(solve(&instance, Strategy::Memoized).unwrap().items, vec![1]);
    assert_eq!(solve(&instance, Strategy::Tabulated).unwrap().items, vec![0]);
}
