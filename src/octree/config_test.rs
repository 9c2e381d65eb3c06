use super::OctreeConfig;

#[test]
fn defaults() {
  let config = OctreeConfig::new(4.0);
  assert_eq!(config.min_node_size, 4.0);
  assert_eq!(config.termination_inflation, 2.0);
  assert_eq!(config.routing_epsilon, 0.001);
  assert!(config.is_valid());
}

#[test]
fn builder_overrides() {
  let config = OctreeConfig::new(1.0)
    .with_termination_inflation(1.5)
    .with_routing_epsilon(0.01);
  assert_eq!(config.termination_inflation, 1.5);
  assert_eq!(config.routing_epsilon, 0.01);
}

#[test]
fn zero_min_size_is_invalid() {
  assert!(!OctreeConfig::new(0.0).is_valid());
  assert!(!OctreeConfig::new(-1.0).is_valid());
}

#[test]
fn negative_epsilon_is_invalid() {
  assert!(!OctreeConfig::new(1.0).with_routing_epsilon(-0.001).is_valid());
}
