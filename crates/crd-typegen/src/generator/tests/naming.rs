use crate::generator::naming::{synthetic_type_name, to_pascal_case};

#[test]
fn test_pascal_case_field_segments() {
  assert_eq!(to_pascal_case("spec"), "Spec");
  assert_eq!(to_pascal_case("apiVersion"), "ApiVersion");
  assert_eq!(to_pascal_case("podTemplate"), "PodTemplate");
  assert_eq!(to_pascal_case("HTTPGet"), "HTTPGet");
  assert_eq!(to_pascal_case("x-kubernetes-preserve"), "XKubernetesPreserve");
  assert_eq!(to_pascal_case("node_selector"), "NodeSelector");
  assert_eq!(to_pascal_case("SPEC"), "Spec");
}

#[test]
fn test_separator_only_names_become_unnamed() {
  for name in ["", "_", "-", "$", "@", "__", "-_."] {
    assert_eq!(to_pascal_case(name), "Unnamed", "name {name:?}");
  }
  assert_eq!(synthetic_type_name("Foo", "_"), "FooUnnamed");
}

#[test]
fn test_synthetic_type_names() {
  assert_eq!(synthetic_type_name("", "io.example.v1.Widget"), "io.example.v1.Widget");
  assert_eq!(synthetic_type_name("", "widget"), "widget");
  assert_eq!(synthetic_type_name("Pod", "spec"), "PodSpec");
  assert_eq!(synthetic_type_name("PodSpec", "securityContext"), "PodSpecSecurityContext");
}
