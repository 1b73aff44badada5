//! End-to-end tests for Go resolver generation.

use quill_codegen_go::{Error, GRAPHQL_IMPORT, Generator};
use quill_manifest::{Config, parse_config};

fn generate(schema: &str, config_toml: &str) -> quill_codegen_go::Result<Vec<(String, String)>> {
    let config = parse_config(config_toml, "quill.toml").expect("Failed to parse config");
    let artifacts = Generator::new(config).generate(schema)?;
    Ok(artifacts.into_contents().into_iter().collect())
}

fn get_file<'a>(files: &'a [(String, String)], name: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, c)| c.as_str())
}

fn filenames(files: &[(String, String)]) -> Vec<&str> {
    files.iter().map(|(name, _)| name.as_str()).collect()
}

const POST: &str = r#"
    type Post {
        id: ID!
        tags: [String!]
    }
"#;

#[test]
fn test_post_resolver() {
    let files = generate(POST, "").unwrap();

    insta::assert_debug_snapshot!(filenames(&files), @r#"
    [
        "post_gen.go",
    ]
    "#);
    assert_eq!(
        get_file(&files, "post_gen.go").unwrap(),
        "package resolvers

import (
\tgraphql \"github.com/graph-gophers/graphql-go\"
)

// PostResolver resolves the Post object.
type PostResolver struct {
\tid graphql.ID
\ttags *[]string
}

// ID resolves Post.id.
func (r *PostResolver) ID() graphql.ID {
\treturn r.id
}

// Tags resolves Post.tags.
func (r *PostResolver) Tags() *[]string {
\treturn r.tags
}
"
    );
}

#[test]
fn test_unsupported_kinds_produce_no_artifacts() {
    let files = generate(
        r#"
        type Post { id: ID! }
        enum Status { DRAFT PUBLISHED }
        input PostFilter { status: Status }
        union Search = Post
        "#,
        "",
    )
    .unwrap();

    insta::assert_debug_snapshot!(filenames(&files), @r#"
    [
        "post_gen.go",
    ]
    "#);
}

#[test]
fn test_unknown_variant_aborts_run() {
    let schema = r#"
        type Author { name: String }
        type Post { id: ID! }
    "#;
    let err = generate(
        schema,
        r#"
        [types.Post.templates.fancy]
        "#,
    )
    .unwrap_err();

    match err {
        Error::UnknownTemplate { owner, variant, .. } => {
            assert_eq!(owner, "Post");
            assert_eq!(variant, "fancy");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unknown_field_variant_names_field() {
    let err = generate(
        POST,
        r#"
        [types.Post.fields.tags.templates.eager]
        "#,
    )
    .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"no field template named 'eager' (requested by Post.tags)");
}

#[test]
fn test_generation_is_idempotent() {
    let schema = r#"
        interface Node { id: ID! }
        type Post implements Node { id: ID! author: User }
        type User implements Node { id: ID! posts: [Post!]! }
    "#;
    assert_eq!(generate(schema, "").unwrap(), generate(schema, "").unwrap());
}

#[test]
fn test_imports_are_deduplicated() {
    let files = generate(
        r#"
        type Edge {
            from: ID!
            to: ID
            path: [ID!]!
        }
        "#,
        "",
    )
    .unwrap();

    let edge = get_file(&files, "edge_gen.go").unwrap();
    assert_eq!(edge.matches(GRAPHQL_IMPORT).count(), 1);
    assert!(edge.contains("\tpath []graphql.ID\n"));
    assert!(edge.contains("\tto *graphql.ID\n"));
}

#[test]
fn test_custom_scalars() {
    let files = generate(
        r#"
        type Post {
            createdAt: Time!
            attachment: Upload
        }
        scalar Time
        scalar Upload
        "#,
        r#"
        [scalars.Time]
        type = "time.Time"
        import = '"time"'
        "#,
    )
    .unwrap();

    insta::assert_debug_snapshot!(filenames(&files), @r#"
    [
        "post_gen.go",
        "upload_gen.go",
    ]
    "#);

    let post = get_file(&files, "post_gen.go").unwrap();
    assert!(post.contains("import (\n\t\"time\"\n)\n"));
    assert!(post.contains("\tcreatedAt time.Time\n"));
    assert!(post.contains("\tattachment *UploadResolver\n"));

    let upload = get_file(&files, "upload_gen.go").unwrap();
    assert!(upload.contains("type UploadResolver struct {\n\tvalue interface{}\n}\n"));
    assert!(upload.contains("\treturn name == \"Upload\"\n"));
    assert!(!upload.contains("import"));
}

#[test]
fn test_interface_resolver() {
    let files = generate(
        r#"
        interface Node { id: ID! }
        type Post implements Node { id: ID! }
        type User implements Node { id: ID! }
        "#,
        "",
    )
    .unwrap();

    let node = get_file(&files, "node_gen.go").unwrap();
    assert!(node.contains("type NodeResolver struct {\n\tresolver interface{}\n\tid graphql.ID\n}\n"));
    assert!(node.contains("\treturn r.resolver.(interface {\n\t\tID() graphql.ID\n\t}).ID()\n"));
    assert!(node.contains("func (r *NodeResolver) ToPost() (*PostResolver, bool) {\n"));
    assert!(node.contains("func (r *NodeResolver) ToUser() (*UserResolver, bool) {\n"));

    let post = get_file(&files, "post_gen.go").unwrap();
    assert!(!post.contains("resolver interface{}"));
    assert!(!post.contains("ToUser"));
}

#[test]
fn test_configured_variants() {
    let files = generate(
        POST,
        r#"
        [types.Post.templates.default]

        [types.Post.templates.constructor]
        prefix = "Make"

        [types.Post.fields.tags.templates.lazy]
        fallback = "nil"
        "#,
    )
    .unwrap();

    let post = get_file(&files, "post_gen.go").unwrap();
    assert!(post.contains("\ttagsFunc func() *[]string\n"));
    assert!(post.contains(
        "func (r *PostResolver) Tags() *[]string {\n\tif r.tagsFunc == nil {\n\t\treturn nil\n\t}\n\treturn r.tagsFunc()\n}\n"
    ));
    assert!(post.ends_with(
        "\n// MakePostResolver creates an empty PostResolver.\nfunc MakePostResolver() *PostResolver {\n\treturn &PostResolver{}\n}\n"
    ));
}

#[test]
fn test_field_with_several_variants_is_indented() {
    let files = generate(
        POST,
        r#"
        [types.Post.fields.tags.templates.default]
        [types.Post.fields.tags.templates.lazy]
        "#,
    )
    .unwrap();

    let post = get_file(&files, "post_gen.go").unwrap();
    assert!(post.contains(
        "type PostResolver struct {\n\tid graphql.ID\n\ttags *[]string\n\ttagsFunc func() *[]string\n}\n"
    ));
}

#[test]
fn test_descriptions_become_comments() {
    let files = generate(
        r#"
        """
        A published
        article
        """
        type Post {
            "Free-form labels"
            tags: [String!]
        }
        "#,
        "",
    )
    .unwrap();

    let post = get_file(&files, "post_gen.go").unwrap();
    assert!(post.contains(
        "// PostResolver resolves the Post object.\n// A published article\ntype PostResolver struct {\n"
    ));
    assert!(post.contains("\ttags *[]string // Free-form labels\n"));
}

#[test]
fn test_package_from_config() {
    let files = generate(POST, "package = \"blog\"").unwrap();
    assert!(get_file(&files, "post_gen.go").unwrap().starts_with("package blog\n"));
}

#[test]
fn test_builtin_scalar_override_is_ignored() {
    let files = generate(
        POST,
        r#"
        [scalars.String]
        type = "MyString"
        skip = false
        "#,
    )
    .unwrap();

    insta::assert_debug_snapshot!(filenames(&files), @r#"
    [
        "post_gen.go",
    ]
    "#);
    assert!(get_file(&files, "post_gen.go").unwrap().contains("\ttags *[]string\n"));
}

#[test]
fn test_schema_error() {
    let err = generate("type Post {", "").unwrap_err();
    assert!(matches!(err, Error::Schema(_)));
}

#[test]
fn test_default_config_generates_without_config_file() {
    let artifacts = Generator::new(Config::default()).generate(POST).unwrap();
    assert_eq!(artifacts.len(), 1);
}
