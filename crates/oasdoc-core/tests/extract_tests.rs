use oasdoc_core::spec::{self, HttpMethod};
use oasdoc_core::{extract_endpoints, group_endpoints_by_tag};

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const MENAGERIE: &str = include_str!("fixtures/menagerie.yaml");

#[test]
fn extraction_order_and_ids() {
    let yaml = r#"
openapi: "3.1.0"
info:
  title: Two paths
  version: "1.0"
paths:
  /a:
    get:
      responses:
        "200":
          description: ok
    post:
      responses:
        "200":
          description: ok
  /b:
    get:
      responses:
        "200":
          description: ok
"#;
    let spec = spec::from_yaml(yaml).unwrap();
    let endpoints = extract_endpoints(&spec);

    let summary: Vec<(&str, HttpMethod, &str)> = endpoints
        .iter()
        .map(|e| (e.id.as_str(), e.method, e.path))
        .collect();
    assert_eq!(
        summary,
        [
            ("get-a", HttpMethod::Get, "/a"),
            ("post-a", HttpMethod::Post, "/a"),
            ("get-b", HttpMethod::Get, "/b"),
        ]
    );
}

#[test]
fn verbs_follow_canonical_order_not_declaration_order() {
    let yaml = r#"
openapi: "3.1.0"
info:
  title: Scrambled verbs
  version: "1.0"
paths:
  /x:
    head:
      responses: {"200": {"description": "ok"}}
    delete:
      responses: {"200": {"description": "ok"}}
    put:
      responses: {"200": {"description": "ok"}}
    options:
      responses: {"200": {"description": "ok"}}
    get:
      responses: {"200": {"description": "ok"}}
    patch:
      responses: {"200": {"description": "ok"}}
    post:
      responses: {"200": {"description": "ok"}}
"#;
    let spec = spec::from_yaml(yaml).unwrap();
    let methods: Vec<HttpMethod> = extract_endpoints(&spec).iter().map(|e| e.method).collect();
    assert_eq!(methods, HttpMethod::CANONICAL_ORDER);
}

#[test]
fn petstore_endpoints_inherit_path_item_parameters() {
    let spec = spec::from_yaml(PETSTORE).unwrap();
    let endpoints = extract_endpoints(&spec);
    assert_eq!(endpoints.len(), 5);

    let ids: Vec<&str> = endpoints.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "get-pets",
            "post-pets",
            "get-pets-petId",
            "delete-pets-petId",
            "get-store-inventory",
        ]
    );

    // /pets/{petId} operations carry the shared petId parameter.
    let get_pet = &endpoints[2];
    assert_eq!(get_pet.parameters.len(), 1);
    // /pets get carries only its own four parameters.
    assert_eq!(endpoints[0].parameters.len(), 4);
}

#[test]
fn grouping_uses_declared_tags_and_descriptions() {
    let spec = spec::from_yaml(PETSTORE).unwrap();
    let endpoints = extract_endpoints(&spec);
    let groups = group_endpoints_by_tag(&spec, &endpoints);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "pets");
    assert_eq!(groups[0].description, "Everything about pets");
    assert_eq!(groups[0].endpoints.len(), 4);
    assert_eq!(groups[1].name, "store");
    assert_eq!(groups[1].endpoints.len(), 1);
}

#[test]
fn untagged_operations_fall_under_the_sentinel() {
    let spec = spec::from_yaml(MENAGERIE).unwrap();
    let endpoints = extract_endpoints(&spec);
    let groups = group_endpoints_by_tag(&spec, &endpoints);

    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["animals", "registry", "Untagged"]);

    let untagged = &groups[2];
    assert_eq!(untagged.description, "");
    assert_eq!(untagged.endpoints.len(), 1);
    assert_eq!(untagged.endpoints[0].id, "get-health");
}

#[test]
fn multi_tagged_operation_appears_in_every_group() {
    let spec = spec::from_yaml(MENAGERIE).unwrap();
    let endpoints = extract_endpoints(&spec);
    let groups = group_endpoints_by_tag(&spec, &endpoints);

    let animals = groups.iter().find(|g| g.name == "animals").unwrap();
    let registry = groups.iter().find(|g| g.name == "registry").unwrap();
    assert!(animals.endpoints.iter().any(|e| e.id == "post-animals"));
    assert!(registry.endpoints.iter().any(|e| e.id == "post-animals"));

    // A tag never declared at the top level still groups, with no
    // description.
    assert_eq!(registry.description, "");
}

#[test]
fn views_are_recomputed_per_document() {
    let spec = spec::from_yaml(PETSTORE).unwrap();
    let first = extract_endpoints(&spec);
    let second = extract_endpoints(&spec);
    let first_ids: Vec<&str> = first.iter().map(|e| e.id.as_str()).collect();
    let second_ids: Vec<&str> = second.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(first_ids, second_ids);
}
