use std::fs;

use unitgen_codegen::{
    CodeGenerator, FileEmitter, GeneratorConfig, ModuleAggregator,
    paths::{DEFAULT_BASE_PACKAGE, DEFAULT_SERVICE},
    testing::TestTree,
};
use unitgen_codegen_java::{FILE_EXTENSION, JavaModuleRenderer, LANGUAGE, capabilities};
use unitgen_ir::{BindingModel, Module, Property, SchemaContext, TypeDescriptor, TypeKind};

fn generator(tree: &TestTree) -> CodeGenerator {
    CodeGenerator::new(
        FileEmitter::new(capabilities(), FILE_EXTENSION),
        ModuleAggregator::new(
            JavaModuleRenderer::new(DEFAULT_BASE_PACKAGE, DEFAULT_SERVICE),
            FILE_EXTENSION,
            DEFAULT_BASE_PACKAGE,
            DEFAULT_SERVICE,
        ),
        GeneratorConfig {
            project_base: tree.root().to_path_buf(),
            language: LANGUAGE.to_string(),
            persistent_sources_dir: Some(tree.persistent().to_path_buf()),
            resource_base_dir: tree.resources().to_path_buf(),
        },
    )
}

fn model() -> BindingModel {
    BindingModel {
        context: SchemaContext::new(vec![
            Module::new("net", "urn:example:net")
                .with_revision("2024-01-15")
                .with_import("types"),
            Module::new("types", "urn:example:types"),
        ]),
        types: vec![
            TypeDescriptor::new("a.b", "Foo", TypeKind::Interface)
                .with_builder()
                .with_property(Property::new("name", "java.lang.String")),
            TypeDescriptor::union_builder("a.b", "AddressBuilder"),
            TypeDescriptor::new("a.c", "Color", TypeKind::Enumeration).with_value("red", 0),
        ],
        modules: None,
    }
}

fn services(tree: &TestTree) -> String {
    fs::read_to_string(tree.resources().join("META-INF/services").join(DEFAULT_SERVICE)).unwrap()
}

#[test]
fn generates_every_unit_and_the_registration() {
    let tree = TestTree::new();
    let outcome = generator(&tree)
        .generate_sources(&model(), tree.regenerated())
        .unwrap();

    let generated = tree.regenerated();
    assert!(generated.join("a/b/Foo.java").exists());
    assert!(generated.join("a/b/FooBuilder.java").exists());
    assert!(generated.join("a/c/Color.java").exists());
    assert!(tree.persistent().join("a/b/AddressBuilder.java").exists());
    assert!(!generated.join("a/b/AddressBuilder.java").exists());

    let net = generated.join("org/unitgen/gen/v1/urn/example/net/rev240115");
    assert!(net.join("$ModuleInfoImpl.java").exists());
    assert!(net.join("$ModelBindingProvider.java").exists());

    assert_eq!(
        services(&tree),
        "org.unitgen.gen.v1.urn.example.net.rev240115.$ModelBindingProvider\n\
         org.unitgen.gen.v1.urn.example.types.$ModelBindingProvider"
    );
    assert!(outcome.combined().is_clean());
}

#[test]
fn module_info_lists_imported_modules() {
    let tree = TestTree::new();
    generator(&tree)
        .generate_sources(&model(), tree.regenerated())
        .unwrap();

    let info = fs::read_to_string(
        tree.regenerated()
            .join("org/unitgen/gen/v1/urn/example/net/rev240115/$ModuleInfoImpl.java"),
    )
    .unwrap();
    assert!(info.contains(
        "java.util.List.of(\"org.unitgen.gen.v1.urn.example.types.$ModuleInfoImpl\")"
    ));
}

#[test]
fn hand_edited_union_builder_survives_regeneration() {
    let tree = TestTree::new();
    let generator = generator(&tree);
    generator
        .generate_sources(&model(), tree.regenerated())
        .unwrap();

    let stub = tree.persistent().join("a/b/AddressBuilder.java");
    fs::write(&stub, "// edited by hand\n").unwrap();

    let outcome = generator
        .generate_sources(&model(), tree.regenerated())
        .unwrap();

    assert_eq!(fs::read_to_string(&stub).unwrap(), "// edited by hand\n");
    assert_eq!(outcome.types.persisted, vec![stub]);
}

#[test]
fn stale_regenerated_unit_is_replaced() {
    let tree = TestTree::new();
    let stale = tree.regenerated().join("a/b/Foo.java");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "stale").unwrap();
    let orphan = tree.regenerated().join("old/Gone.java");
    fs::create_dir_all(orphan.parent().unwrap()).unwrap();
    fs::write(&orphan, "orphan").unwrap();

    let outcome = generator(&tree)
        .generate_sources(&model(), tree.regenerated())
        .unwrap();

    assert!(fs::read_to_string(&stale).unwrap().contains("public interface Foo {"));
    assert!(!orphan.exists());
    assert!(outcome.types.conflicts.is_empty());
}

#[test]
fn module_info_unit_declared_as_type_conflicts() {
    let tree = TestTree::new();
    let model = BindingModel {
        context: SchemaContext::new(vec![Module::new("types", "urn:example:types")]),
        types: vec![TypeDescriptor::new(
            "org.unitgen.gen.v1.urn.example.types",
            "$ModuleInfoImpl",
            TypeKind::Interface,
        )],
        modules: None,
    };

    let outcome = generator(&tree)
        .generate_sources(&model, tree.regenerated())
        .unwrap();

    let info = tree
        .regenerated()
        .join("org/unitgen/gen/v1/urn/example/types/$ModuleInfoImpl.java");
    assert!(fs::read_to_string(&info).unwrap().contains("public interface $ModuleInfoImpl {"));
    assert_eq!(outcome.modules.emission.conflicts.len(), 1);
    assert!(outcome.modules.emission.conflicts[0].in_run);
    assert_eq!(
        services(&tree),
        "org.unitgen.gen.v1.urn.example.types.$ModelBindingProvider"
    );
}

#[test]
fn module_artifacts_are_rewritten_on_every_run() {
    let tree = TestTree::new();
    let generator = generator(&tree);
    generator
        .generate_sources(&model(), tree.regenerated())
        .unwrap();

    let info = tree
        .regenerated()
        .join("org/unitgen/gen/v1/urn/example/types/$ModuleInfoImpl.java");
    let original = fs::read_to_string(&info).unwrap();
    fs::write(&info, "tampered").unwrap();

    let outcome = generator
        .generate_sources(
            &BindingModel {
                types: Vec::new(),
                ..model()
            },
            tree.regenerated(),
        )
        .unwrap();
    assert!(outcome.modules.emission.is_clean());
    assert_eq!(fs::read_to_string(&info).unwrap(), original);
}

#[test]
fn selected_modules_limit_the_registration() {
    let tree = TestTree::new();
    let model = BindingModel {
        modules: Some(vec!["types".to_string()]),
        ..model()
    };
    generator(&tree)
        .generate_sources(&model, tree.regenerated())
        .unwrap();

    assert_eq!(
        services(&tree),
        "org.unitgen.gen.v1.urn.example.types.$ModelBindingProvider"
    );
}

#[test]
fn same_unit_name_in_one_package_writes_one_file() {
    let tree = TestTree::new();
    let model = BindingModel {
        types: vec![
            TypeDescriptor::new("a.b", "Foo", TypeKind::Interface),
            TypeDescriptor::new("a.b", "Foo", TypeKind::Enumeration).with_value("one", 1),
        ],
        ..model()
    };

    let outcome = generator(&tree)
        .generate_sources(&model, tree.regenerated())
        .unwrap();

    let foo = tree.regenerated().join("a/b/Foo.java");
    assert!(fs::read_to_string(&foo).unwrap().contains("public interface Foo {"));
    assert_eq!(outcome.types.written, vec![foo]);
    assert_eq!(outcome.types.conflicts.len(), 1);
    assert!(outcome.types.conflicts[0].in_run);
}
