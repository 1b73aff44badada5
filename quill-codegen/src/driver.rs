//! Whole-schema generation.

use std::collections::{BTreeMap, btree_map::Entry};

use quill_ir::{Catalogue, SchemaType, TypeKind};
use quill_manifest::Config;
use tracing::{debug, info};

use crate::{
    Error, Formatter, Language, Renderer, Result, ScalarMapping, TemplateStore, Tidy, TypeMapper,
};

/// Suffix between the lowercased type name and the file extension.
pub const ARTIFACT_SUFFIX: &str = "_gen";

/// Types whose name starts with this prefix are internal and never generated.
pub const INTERNAL_PREFIX: &str = "_";

/// What the driver does with one schema type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Generate { filename: String },
    /// Introspection and other internal types
    SkipInternal,
    /// Scalars mapped onto a target type
    SkipScalar,
    /// Kinds without resolver output (enums, inputs, unions)
    SkipUnsupported,
}

impl Action {
    /// Human readable reason for a skip.
    pub fn skip_reason(&self) -> Option<&'static str> {
        match self {
            Action::Generate { .. } => None,
            Action::SkipInternal => Some("internal type"),
            Action::SkipScalar => Some("mapped scalar"),
            Action::SkipUnsupported => Some("not supported yet"),
        }
    }
}

/// A schema type with the action planned for it.
#[derive(Debug, Clone)]
pub struct PlannedType<'c> {
    pub ty: &'c SchemaType,
    pub action: Action,
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Schema type the file was generated from
    pub type_name: String,
    pub content: String,
}

/// Generated files keyed and iterated by filename.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artifacts {
    files: BTreeMap<String, Artifact>,
}

impl Artifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file; a second type producing the same filename is an error.
    pub fn insert(
        &mut self,
        filename: impl Into<String>,
        type_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<()> {
        let type_name = type_name.into();
        match self.files.entry(filename.into()) {
            Entry::Occupied(entry) => Err(Error::ArtifactCollision {
                filename: entry.key().clone(),
                first: entry.get().type_name.clone(),
                second: type_name,
            }),
            Entry::Vacant(entry) => {
                entry.insert(Artifact {
                    type_name,
                    content: content.into(),
                });
                Ok(())
            }
        }
    }

    pub fn get(&self, filename: &str) -> Option<&str> {
        self.files.get(filename).map(|artifact| artifact.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Artifact)> {
        self.files.iter().map(|(name, artifact)| (name.as_str(), artifact))
    }

    /// Filename to content.
    pub fn into_contents(self) -> BTreeMap<String, String> {
        self.files
            .into_iter()
            .map(|(name, artifact)| (name, artifact.content))
            .collect()
    }
}

/// Generates one artifact per eligible schema type.
///
/// # Example
///
/// ```ignore
/// let driver = Driver::new(Go, Config::default(), go_templates());
/// let artifacts = driver.generate("type Post { id: ID! }")?;
/// assert!(artifacts.get("post_gen.go").is_some());
/// ```
pub struct Driver {
    language: Box<dyn Language>,
    config: Config,
    scalars: ScalarMapping,
    templates: Box<dyn TemplateStore>,
    formatter: Box<dyn Formatter>,
}

impl Driver {
    /// Create a driver formatting with [`Tidy`].
    pub fn new(
        language: impl Language + 'static,
        config: Config,
        templates: impl TemplateStore + 'static,
    ) -> Self {
        let scalars = ScalarMapping::for_language(&language, &config.scalars);
        Self {
            language: Box::new(language),
            config,
            scalars,
            templates: Box::new(templates),
            formatter: Box::new(Tidy),
        }
    }

    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scalars(&self) -> &ScalarMapping {
        &self.scalars
    }

    pub fn language(&self) -> &dyn Language {
        self.language.as_ref()
    }

    pub fn templates(&self) -> &dyn TemplateStore {
        self.templates.as_ref()
    }

    /// Filename of the artifact generated for a type.
    pub fn filename(&self, type_name: &str) -> String {
        format!(
            "{}{}.{}",
            type_name.to_lowercase(),
            ARTIFACT_SUFFIX,
            self.language.file_extension()
        )
    }

    /// Decide what happens to each type of the catalogue, in name order.
    pub fn plan<'c>(&self, catalogue: &'c Catalogue) -> Vec<PlannedType<'c>> {
        catalogue
            .types()
            .map(|ty| PlannedType {
                ty,
                action: self.action_for(ty),
            })
            .collect()
    }

    fn action_for(&self, ty: &SchemaType) -> Action {
        if ty.name.starts_with(INTERNAL_PREFIX) {
            return Action::SkipInternal;
        }
        // By name, whatever the kind.
        if self.scalars.is_skipped(&ty.name) {
            return Action::SkipScalar;
        }
        match ty.kind {
            TypeKind::Scalar | TypeKind::Object | TypeKind::Interface => Action::Generate {
                filename: self.filename(&ty.name),
            },
            _ => Action::SkipUnsupported,
        }
    }

    /// Parse schema text and generate every artifact.
    pub fn generate(&self, schema: &str) -> Result<Artifacts> {
        let catalogue = Catalogue::parse(schema)?;
        self.generate_catalogue(&catalogue)
    }

    /// Generate every artifact of a parsed schema.
    ///
    /// The first failure aborts the run and no artifacts are returned.
    pub fn generate_catalogue(&self, catalogue: &Catalogue) -> Result<Artifacts> {
        let renderer = Renderer::new(
            &self.config,
            &self.scalars,
            TypeMapper::new(self.language.as_ref(), &self.scalars),
            self.templates.as_ref(),
            self.formatter.as_ref(),
        );

        let mut artifacts = Artifacts::new();
        for PlannedType { ty, action } in self.plan(catalogue) {
            match action {
                Action::Generate { filename } => {
                    info!(
                        "Generating {} code for {} {}",
                        self.language.name(),
                        ty.kind,
                        ty.name
                    );
                    let code = renderer.render_type(ty)?;
                    artifacts.insert(filename, &ty.name, code)?;
                }
                Action::SkipUnsupported => info!("{} {} not supported yet", ty.kind, ty.name),
                Action::SkipInternal | Action::SkipScalar => {
                    debug!("Skipping {} {}", ty.kind, ty.name)
                }
            }
        }
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use quill_manifest::{Params, ScalarOverride, TypeConfig, Variants};

    use super::*;
    use crate::{Templates, scalars::tests::TestLanguage};

    const SCHEMA: &str = r#"
        type Post {
            id: ID!
            tags: [String!]
            createdAt: Time
        }

        interface Node { id: ID! }
        enum Status { DRAFT }
        input PostFilter { status: Status }
        union Search = Post
        scalar Time
        scalar Upload
    "#;

    fn templates() -> Templates {
        Templates::new()
            .with_type(
                "default",
                "{% for import in imports %}import {{ import }}\n{% endfor %}type {{ type_name }} {\n{% for field in fields %}{{ field }}{% endfor %}}\n",
            )
            .with_field("default", "{{ field_name }} {{ field_type }}\n", "")
    }

    fn time_config() -> Config {
        let mut config = Config::default();
        config.scalars.insert(
            "Time".to_string(),
            ScalarOverride {
                target: "time.Time".to_string(),
                import: Some(r#""time""#.to_string()),
                skip: true,
            },
        );
        config
    }

    fn driver(config: Config) -> Driver {
        Driver::new(TestLanguage, config, templates())
    }

    #[test]
    fn test_plan() {
        let catalogue = Catalogue::parse(SCHEMA).unwrap();
        let driver = driver(time_config());
        let plan: BTreeMap<&str, Action> = driver
            .plan(&catalogue)
            .into_iter()
            .map(|planned| (planned.ty.name.as_str(), planned.action))
            .collect();

        assert_eq!(
            plan["Post"],
            Action::Generate {
                filename: "post_gen.go".to_string()
            }
        );
        assert_eq!(
            plan["Upload"],
            Action::Generate {
                filename: "upload_gen.go".to_string()
            }
        );
        assert_eq!(plan["Time"], Action::SkipScalar);
        assert_eq!(plan["String"], Action::SkipScalar);
        assert_eq!(plan["__Type"], Action::SkipInternal);
        assert_eq!(plan["Status"], Action::SkipUnsupported);
        assert_eq!(plan["PostFilter"], Action::SkipUnsupported);
        assert_eq!(plan["Search"], Action::SkipUnsupported);
        assert_eq!(plan["Search"].skip_reason(), Some("not supported yet"));
    }

    #[test]
    fn test_generate() {
        let artifacts = driver(time_config()).generate(SCHEMA).unwrap();

        let names: Vec<&str> = artifacts.filenames().collect();
        assert_eq!(names, ["node_gen.go", "post_gen.go", "upload_gen.go"]);
        assert_eq!(
            artifacts.get("post_gen.go").unwrap(),
            "import graphql \"github.com/graph-gophers/graphql-go\"\nimport \"time\"\ntype Post {\nid graphql.ID\ntags *[]string\ncreatedAt *time.Time\n}\n"
        );
        assert_eq!(artifacts.get("upload_gen.go").unwrap(), "type Upload {\n}\n");
    }

    #[test]
    fn test_mapped_scalar_name_skips_any_kind() {
        let mut config = Config::default();
        config.scalars.insert(
            "Money".to_string(),
            ScalarOverride {
                target: "decimal.Decimal".to_string(),
                import: None,
                skip: true,
            },
        );
        let artifacts = driver(config)
            .generate("type Money { amount: Int! } type Order { total: Money! }")
            .unwrap();

        let names: Vec<&str> = artifacts.filenames().collect();
        assert_eq!(names, ["order_gen.go"]);
        assert_eq!(
            artifacts.get("order_gen.go").unwrap(),
            "type Order {\ntotal decimal.Decimal\n}\n"
        );
    }

    #[test]
    fn test_generate_is_idempotent() {
        let driver = driver(time_config());
        assert_eq!(
            driver.generate(SCHEMA).unwrap(),
            driver.generate(SCHEMA).unwrap()
        );
    }

    #[test]
    fn test_failure_returns_no_artifacts() {
        let mut config = time_config();
        config.types.insert(
            "Upload".to_string(),
            TypeConfig {
                templates: Variants::new().with("nope", Params::new()),
                fields: IndexMap::new(),
            },
        );

        // Node and Post render before Upload fails.
        let err = driver(config).generate(SCHEMA).unwrap_err();
        assert!(matches!(err, Error::UnknownTemplate { ref owner, .. } if owner == "Upload"));
    }

    #[test]
    fn test_schema_error() {
        let err = driver(Config::default()).generate("type {").unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
    }

    #[test]
    fn test_filename_collision() {
        let err = driver(Config::default())
            .generate("type Post { id: ID } type POST { id: ID }")
            .unwrap_err();
        match err {
            Error::ArtifactCollision {
                filename,
                first,
                second,
            } => {
                assert_eq!(filename, "post_gen.go");
                assert_eq!(first, "POST");
                assert_eq!(second, "Post");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_artifacts_into_contents() {
        let mut artifacts = Artifacts::new();
        artifacts.insert("a_gen.go", "A", "a").unwrap();
        assert_eq!(artifacts.len(), 1);

        let contents = artifacts.into_contents();
        assert_eq!(contents["a_gen.go"], "a");
    }
}
