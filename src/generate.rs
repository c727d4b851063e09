use {
    crate::{
        ast::AstConfig,
        collector::collect,
        render::{format_group, render_group},
        validate::{ConfigError, validate},
    },
    std::{fs, io, path::Path},
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("the configuration is invalid")]
    Config(#[from] ConfigError),
    #[error("could not create the output directory {0}")]
    CreateOutputDir(String, #[source] io::Error),
    #[error("could not write {0}")]
    WriteFile(String, #[source] io::Error),
}

const OUTPUT_DIR: &str = "output";

pub fn main() -> Result<(), GeneratorError> {
    let config = collect();
    run(&config, Path::new(OUTPUT_DIR))
}

/// Validates the whole configuration up front, then renders and
/// writes one file per group in declared order. A configuration
/// error therefore never leaves partial output behind; a write
/// failure aborts the run immediately.
pub(crate) fn run(config: &AstConfig, out_dir: &Path) -> Result<(), GeneratorError> {
    validate(&config.groups)?;
    fs::create_dir_all(out_dir)
        .map_err(|e| GeneratorError::CreateOutputDir(out_dir.display().to_string(), e))?;
    for group in &config.groups {
        let model = render_group(config.namespace, group);
        let path = out_dir.join(format!("{}.cs", group.name));
        fs::write(&path, format_group(&model))
            .map_err(|e| GeneratorError::WriteFile(path.display().to_string(), e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        super::{GeneratorError, run},
        crate::{
            ast::{AstConfig, Field, Group, Node},
            collector::collect,
        },
        std::fs,
    };

    #[test]
    fn writes_one_file_per_group() {
        let dir = tempfile::tempdir().unwrap();
        run(&collect(), dir.path()).unwrap();
        assert!(dir.path().join("Expr.cs").exists());
        assert!(dir.path().join("Stmt.cs").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn rerunning_produces_byte_identical_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = collect();
        run(&config, dir.path()).unwrap();
        let expr = fs::read(dir.path().join("Expr.cs")).unwrap();
        let stmt = fs::read(dir.path().join("Stmt.cs")).unwrap();
        run(&config, dir.path()).unwrap();
        assert_eq!(fs::read(dir.path().join("Expr.cs")).unwrap(), expr);
        assert_eq!(fs::read(dir.path().join("Stmt.cs")).unwrap(), stmt);
    }

    #[test]
    fn invalid_configuration_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("output");
        let config = AstConfig {
            namespace: "Lox",
            groups: vec![Group {
                name: "Expr",
                members: vec![Node {
                    name: "Binary",
                    fields: vec![
                        Field {
                            ty: "Expr",
                            name: "left",
                        },
                        Field {
                            ty: "Token",
                            name: "left",
                        },
                    ],
                }],
            }],
        };
        let err = run(&config, &out_dir).unwrap_err();
        assert!(matches!(err, GeneratorError::Config(_)));
        assert!(!out_dir.exists());
    }

    #[test]
    fn unwritable_destination_aborts_the_run() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the output directory should go.
        let out_dir = dir.path().join("output");
        fs::write(&out_dir, b"").unwrap();
        let err = run(&collect(), &out_dir).unwrap_err();
        assert!(matches!(err, GeneratorError::CreateOutputDir(..)));
    }

    #[test]
    fn generated_expr_file_lists_every_node() {
        let dir = tempfile::tempdir().unwrap();
        run(&collect(), dir.path()).unwrap();
        let expr = fs::read_to_string(dir.path().join("Expr.cs")).unwrap();
        for method in [
            "VisitBinaryExpr",
            "VisitUnaryExpr",
            "VisitLiteralExpr",
            "VisitGroupingExpr",
            "VisitVariableExpr",
        ] {
            assert!(expr.contains(method), "missing {method}");
        }
        assert!(expr.starts_with("namespace Lox;\n"));
    }
}
