use unitgen_codegen::{
    ModuleRenderer, ModuleSources,
    paths::{BINDING_PROVIDER_UNIT, MODULE_INFO_UNIT},
};
use unitgen_core::namespace_to_package_name;
use unitgen_ir::{Module, SchemaContext};

use crate::{naming::string_literal, unit};

/// Renders the per-module `$ModuleInfoImpl` singleton and the
/// `$ModelBindingProvider` service implementation that exposes it.
#[derive(Debug, Clone)]
pub struct JavaModuleRenderer {
    base_package: String,
    service: String,
}

impl JavaModuleRenderer {
    /// `base_package` must match the aggregator's so that imported modules
    /// resolve to the packages they are generated into.
    pub fn new(base_package: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            base_package: base_package.into(),
            service: service.into(),
        }
    }

    fn module_info(&self, module: &Module, package: &str, context: &SchemaContext) -> String {
        let class = MODULE_INFO_UNIT;
        let revision = module
            .revision
            .as_deref()
            .map_or_else(|| "null".to_string(), string_literal);
        let imports = context
            .imports_of(module)
            .map(|import| {
                let package = namespace_to_package_name(
                    &self.base_package,
                    &import.namespace,
                    import.revision.as_deref(),
                );
                string_literal(&format!("{package}.{MODULE_INFO_UNIT}"))
            })
            .collect::<Vec<_>>()
            .join(", ");
        let description = module
            .description
            .clone()
            .unwrap_or_else(|| format!("Module info for {}.", module.name));

        unit(package, true)
            .javadoc(&description)
            .block_with_close(&format!("public final class {class} {{"), "}", |b| {
                b.line(&format!(
                    "public static final java.lang.String NAME = {};",
                    string_literal(&module.name)
                ))
                .line(&format!(
                    "public static final java.lang.String NAMESPACE = {};",
                    string_literal(&module.namespace)
                ))
                .line(&format!("public static final java.lang.String REVISION = {revision};"))
                .blank()
                .line(&format!(
                    "private static final java.util.List<java.lang.String> IMPORTS = java.util.List.of({imports});"
                ))
                .line(&format!("private static final {class} INSTANCE = new {class}();"))
                .blank()
                .block_with_close(&format!("private {class}() {{"), "}", |b| b)
                .blank()
                .block_with_close(&format!("public static {class} getInstance() {{"), "}", |b| {
                    b.line("return INSTANCE;")
                })
                .blank()
                .block_with_close(
                    "public java.util.List<java.lang.String> getImportedModules() {",
                    "}",
                    |b| b.line("return IMPORTS;"),
                )
            })
            .build()
    }

    fn provider(&self, package: &str) -> String {
        unit(package, true)
            .block_with_close(
                &format!(
                    "public final class {BINDING_PROVIDER_UNIT} implements {} {{",
                    self.service
                ),
                "}",
                |b| {
                    b.line("@Override")
                        .block_with_close("public java.lang.Object getModuleInfo() {", "}", |b| {
                            b.line(&format!("return {MODULE_INFO_UNIT}.getInstance();"))
                        })
                },
            )
            .build()
    }
}

impl ModuleRenderer for JavaModuleRenderer {
    fn render(&self, module: &Module, package: &str, context: &SchemaContext) -> ModuleSources {
        ModuleSources {
            module_info: self.module_info(module, package, context),
            provider: self.provider(package),
            providers: vec![format!("{package}.{BINDING_PROVIDER_UNIT}")],
        }
    }
}
