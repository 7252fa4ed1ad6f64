use triage_utils::*;

#[test]
fn test_seed_from_str_and_index() {
    let seeds: Vec<[u8; 32]> = (0..5).map(|i| seed_from_str_and_index("trials", i)).collect();
    for i in 0..seeds.len() {
        for j in (i + 1)..seeds.len() {
            assert_ne!(seeds[i], seeds[j]);
        }
    }
    assert_eq!(seeds[3], seed_from_str_and_index("trials", 3));
    assert_ne!(seeds[0], seed_from_str_and_index("trial", 0));
}
