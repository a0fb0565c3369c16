use oasdoc_core::ParseError;
use oasdoc_core::spec::{self, ParameterOrRef};

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const MENAGERIE: &str = include_str!("fixtures/menagerie.yaml");

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn parse_petstore_yaml() {
    init_logging();
    let spec = spec::from_yaml(PETSTORE).expect("should parse petstore.yaml");
    assert_eq!(spec.openapi, "3.0.3");
    assert_eq!(spec.info.title, "Petstore");
    assert_eq!(spec.servers.len(), 2);
    assert_eq!(spec.tags.len(), 2);
    assert_eq!(spec.paths.len(), 3);

    // Declaration order survives parsing.
    let paths: Vec<&str> = spec.paths.keys().map(String::as_str).collect();
    assert_eq!(paths, ["/pets", "/pets/{petId}", "/store/inventory"]);

    let components = spec.components.as_ref().expect("should have components");
    assert_eq!(components.schemas.len(), 3);
    assert_eq!(components.parameters.len(), 1);
    assert_eq!(components.responses.len(), 2);
    assert_eq!(components.request_bodies.len(), 1);
}

#[test]
fn parse_preserves_property_order() {
    let spec = spec::from_yaml(PETSTORE).unwrap();
    let components = spec.components.as_ref().unwrap();
    let pet = match components.schemas.get("Pet").unwrap() {
        spec::SchemaOrRef::Schema(schema) => schema,
        spec::SchemaOrRef::Ref { .. } => panic!("expected inline schema"),
    };
    let names: Vec<&str> = pet.properties.keys().map(String::as_str).collect();
    assert_eq!(names, ["id", "name", "status", "registeredAt", "ownerEmail"]);
    assert_eq!(pet.required, ["id", "name"]);
}

#[test]
fn parse_parameters() {
    let spec = spec::from_yaml(PETSTORE).unwrap();

    let list_pets = spec.paths["/pets"].get.as_ref().unwrap();
    assert_eq!(list_pets.operation_id.as_deref(), Some("listPets"));
    assert_eq!(list_pets.parameters.len(), 4);
    match &list_pets.parameters[1] {
        ParameterOrRef::Parameter(status) => {
            assert_eq!(status.name, "status");
            assert_eq!(status.location, spec::ParameterLocation::Query);
            assert_eq!(status.example, Some(serde_json::json!("available")));
        }
        ParameterOrRef::Ref { .. } => panic!("expected inline parameter"),
    }

    // Path-item-level parameters parse as references.
    let by_id = &spec.paths["/pets/{petId}"];
    assert_eq!(by_id.parameters.len(), 1);
    match &by_id.parameters[0] {
        ParameterOrRef::Ref { ref_path } => {
            assert_eq!(ref_path, "#/components/parameters/PetId");
        }
        ParameterOrRef::Parameter(_) => panic!("expected reference"),
    }
}

#[test]
fn from_str_accepts_json() {
    let json = r#"{
        "openapi": "3.1.0",
        "info": {"title": "Tiny", "version": "0.1.0"},
        "paths": {"/ping": {"get": {"responses": {"200": {"description": "pong"}}}}}
    }"#;
    let spec = spec::from_str(json).expect("should parse JSON");
    assert_eq!(spec.openapi, "3.1.0");
    assert_eq!(spec.paths.len(), 1);
}

#[test]
fn from_str_falls_back_to_yaml() {
    let spec = spec::from_str(MENAGERIE).expect("should fall back to YAML");
    assert_eq!(spec.info.title, "Menagerie");
}

#[test]
fn from_str_rejects_garbage() {
    assert!(spec::from_str("{ not valid in either syntax").is_err());
}

#[test]
fn missing_paths_is_an_error() {
    let yaml = r#"
openapi: "3.0.0"
info:
  title: No paths here
  version: "1.0"
"#;
    assert!(spec::from_yaml(yaml).is_err());
}

#[test]
fn missing_version_marker_is_an_error() {
    let yaml = r#"
info:
  title: No version marker
  version: "1.0"
paths: {}
"#;
    let err = spec::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, ParseError::MissingField(ref field) if field == "openapi"));
}

#[test]
fn unknown_fields_are_tolerated() {
    let yaml = r#"
openapi: "3.1.0"
info:
  title: Deviant
  version: "1.0"
x-vendor-extension: true
security:
  - apiKey: []
paths:
  /ping:
    get:
      x-rate-limit: 10
      responses:
        "200":
          description: pong
"#;
    let spec = spec::from_yaml(yaml).expect("extra fields should be ignored");
    assert_eq!(spec.paths.len(), 1);
}

#[test]
fn minimal_document_parses() {
    let spec = spec::from_yaml("openapi: \"3.1.0\"\npaths: {}\n").unwrap();
    assert!(spec.paths.is_empty());
    assert_eq!(spec.info.title, "");
}
