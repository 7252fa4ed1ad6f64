use triage_knapsack::*;

#[test]
fn test_example_instance() {
    let instance = Instance::example();
    assert_eq!(instance.num_items(), 5);
    assert_eq!(instance.capacity(), 180);
    assert_eq!(instance.items()[4], Item::new(120, 70));
}

#[test]
fn test_from_pairs() {
    let instance = Instance::from_pairs(&[(30, 10), (1, 0)], 50).unwrap();
    assert_eq!(instance.items(), &[Item::new(30, 10), Item::new(1, 0)]);
    assert_eq!(instance.capacity(), 50);
}

#[test]
fn test_from_pairs_rejects_negative_cost() {
    let err = Instance::from_pairs(&[(30, 10), (-1, 5)], 50).unwrap_err();
    assert!(err.to_string().contains("Item (1)"));
    assert!(err.to_string().contains("Cost (-1)"));
}

#[test]
fn test_from_pairs_rejects_negative_value() {
    let err = Instance::from_pairs(&[(30, -10)], 50).unwrap_err();
    assert!(err.to_string().contains("Value (-10)"));
}

#[test]
fn test_from_pairs_rejects_negative_capacity() {
    let err = Instance::from_pairs(&[(30, 10)], -1).unwrap_err();
    assert!(err.to_string().contains("Capacity (-1)"));
}

#[test]
fn test_rejects_zero_cost() {
    let err = Instance::from_pairs(&[(30, 10), (0, 5)], 50).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Item (1): Cost must be at least 1"));
    assert!(message.contains("exhausted budget"));
    assert!(Instance::new(vec![Item::new(0, 1)], 10).is_err());
}

#[test]
fn test_from_pairs_rejects_oversized_cost() {
    assert!(Instance::from_pairs(&[(u32::MAX as i64 + 1, 1)], 10).is_err());
}

#[test]
fn test_new_rejects_value_overflow() {
    let err = Instance::new(vec![Item::new(1, u32::MAX), Item::new(1, 1)], 5).unwrap_err();
    assert!(err.to_string().contains("exceeds"));
    assert!(Instance::new(vec![Item::new(1, u32::MAX)], 5).is_ok());
}

#[test]
fn test_deserialize_instance() {
    let instance: Instance = serde_json::from_str(
        r#"{"items": [{"cost": 30, "value": 10}, {"cost": 40, "value": 20}], "capacity": 60}"#,
    )
    .unwrap();
    assert_eq!(instance.items(), &[Item::new(30, 10), Item::new(40, 20)]);
    assert_eq!(instance.capacity(), 60);
}

#[test]
fn test_deserialize_instance_rejects_negatives() {
    assert!(serde_json::from_str::<Instance>(
        r#"{"items": [{"cost": -3, "value": 1}], "capacity": 10}"#
    )
    .is_err());
    assert!(serde_json::from_str::<Instance>(r#"{"items": [], "capacity": -10}"#).is_err());
}

#[test]
fn test_serialize_instance_round_trips() {
    let instance = Instance::example();
    let json = serde_json::to_string(&instance).unwrap();
    assert!(json.starts_with(r#"{"items":[{"cost":30,"value":10}"#));
    assert_eq!(serde_json::from_str::<Instance>(&json).unwrap(), instance);
}

#[test]
fn test_verify_selection() {
    let instance = Instance::example();
    assert_eq!(instance.verify_selection(&[2, 4]).unwrap(), 100);
    assert_eq!(instance.verify_selection(&[]).unwrap(), 0);
    assert_eq!(instance.verify_selection(&[0, 1, 3]).unwrap(), 80);
}

#[test]
fn test_verify_selection_rejects_duplicates() {
    let err = Instance::example().verify_selection(&[1, 1]).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate items selected.");
}

#[test]
fn test_verify_selection_rejects_out_of_bounds() {
    let err = Instance::example().verify_selection(&[0, 5]).unwrap_err();
    assert_eq!(err.to_string(), "Item (5) is out of bounds");
}

#[test]
fn test_verify_selection_rejects_overweight() {
    let err = Instance::example().verify_selection(&[3, 4]).unwrap_err();
    assert_eq!(err.to_string(), "Total cost (210) exceeded capacity (180)");
}
