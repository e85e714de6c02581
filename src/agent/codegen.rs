//! Code generation agent.
//!
//! Renders function, class, and snippet skeletons by template substitution.
//! No semantic analysis happens here: the description and context fields are
//! interpolated verbatim into fixed templates.

use super::template::{render_template, vars};
use super::{Agent, AgentError};
use crate::task::{CodegenOptions, TaskContext, TaskOutcome, TaskPayload, TaskRequest};
use serde_json::json;

const ACCEPTED_TYPES: &[&str] = &["code_generation", "function", "class", "snippet"];

const FUNCTION_TEMPLATE: &str = r#"def {name}({params}) -> {return_type}:
    """
    {description}
    """
    # TODO: Implement function logic
    pass"#;

const CLASS_TEMPLATE: &str = r#"class {name}:
    """
    {description}
    """

    def __init__(self):
        # TODO: Initialize class attributes
        pass"#;

const SNIPPET_TEMPLATE: &str = r#"# {description}
# TODO: Implement code logic
pass"#;

/// Agent specialized in generating code skeletons.
pub struct CodeGenerationAgent;

impl CodeGenerationAgent {
    fn render(&self, task: &TaskRequest) -> Result<String, AgentError> {
        let opts = match &task.context {
            TaskContext::Codegen(opts) => opts.clone(),
            _ => CodegenOptions::default(),
        };

        let rendered = match task.task_type.as_str() {
            "function" => render_template(
                FUNCTION_TEMPLATE,
                &vars([
                    (
                        "name",
                        opts.name
                            .unwrap_or_else(|| "generated_function".to_string()),
                    ),
                    ("params", opts.parameters.join(", ")),
                    (
                        "return_type",
                        opts.return_type.unwrap_or_else(|| "None".to_string()),
                    ),
                    ("description", task.description.clone()),
                ]),
            )?,
            "class" => render_template(
                CLASS_TEMPLATE,
                &vars([
                    (
                        "name",
                        opts.name.unwrap_or_else(|| "GeneratedClass".to_string()),
                    ),
                    ("description", task.description.clone()),
                ]),
            )?,
            _ => render_template(
                SNIPPET_TEMPLATE,
                &vars([("description", task.description.clone())]),
            )?,
        };

        Ok(rendered)
    }
}

impl Agent for CodeGenerationAgent {
    fn name(&self) -> &str {
        "CodeGenerationAgent"
    }

    fn capabilities(&self) -> Vec<String> {
        vec![
            "code_generation".to_string(),
            "function_creation".to_string(),
            "class_creation".to_string(),
        ]
    }

    fn interested_in(&self, task: &TaskRequest) -> bool {
        ACCEPTED_TYPES.contains(&task.task_type.as_str())
    }

    fn attempt(&self, task: &TaskRequest) -> Result<TaskOutcome, AgentError> {
        let rendered = match self.render(task) {
            Ok(text) => text,
            Err(err) => {
                return Ok(TaskOutcome::failure(format!(
                    "Code generation failed: {}",
                    err
                )));
            }
        };

        let lines_generated = rendered.split('\n').count();
        Ok(TaskOutcome::success(
            TaskPayload::Text(rendered),
            format!("Code generated successfully for {}", task.task_type),
        )
        .with_metadata("lines_generated", json!(lines_generated)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function_task() -> TaskRequest {
        TaskRequest::new("function", "Calculate the factorial of n").with_context(
            TaskContext::Codegen(CodegenOptions {
                name: Some("calculate_factorial".to_string()),
                parameters: vec!["n: int".to_string()],
                return_type: Some("int".to_string()),
            }),
        )
    }

    #[test]
    fn interested_in_accepted_types_only() {
        let agent = CodeGenerationAgent;
        for tag in ["code_generation", "function", "class", "snippet"] {
            assert!(agent.interested_in(&TaskRequest::new(tag, "d")), "{tag}");
        }
        assert!(!agent.interested_in(&TaskRequest::new("test", "d")));
        assert!(!agent.interested_in(&TaskRequest::new("analysis", "d")));
    }

    #[test]
    fn renders_function_declaration() {
        let outcome = CodeGenerationAgent.attempt(&function_task()).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.message, "Code generated successfully for function");

        let text = outcome.text().unwrap();
        assert!(text.contains("def calculate_factorial(n: int) -> int:"));
        assert!(text.contains("Calculate the factorial of n"));
        assert!(text.contains("pass"));
    }

    #[test]
    fn function_defaults_apply_with_empty_context() {
        let outcome = CodeGenerationAgent
            .attempt(&TaskRequest::new("function", "d"))
            .unwrap();
        let text = outcome.text().unwrap();
        assert!(text.contains("def generated_function() -> None:"));
    }

    #[test]
    fn multiple_parameters_are_joined_with_comma() {
        let task = TaskRequest::new("function", "d").with_context(TaskContext::Codegen(
            CodegenOptions {
                name: Some("add".to_string()),
                parameters: vec!["a: int".to_string(), "b: int".to_string()],
                return_type: Some("int".to_string()),
            },
        ));
        let outcome = CodeGenerationAgent.attempt(&task).unwrap();
        assert!(outcome.text().unwrap().contains("def add(a: int, b: int) -> int:"));
    }

    #[test]
    fn renders_class_declaration() {
        let task = TaskRequest::new("class", "A cache with eviction").with_context(
            TaskContext::Codegen(CodegenOptions {
                name: Some("LruCache".to_string()),
                ..Default::default()
            }),
        );
        let outcome = CodeGenerationAgent.attempt(&task).unwrap();
        let text = outcome.text().unwrap();
        assert!(text.contains("class LruCache:"));
        assert!(text.contains("A cache with eviction"));
        assert!(text.contains("def __init__(self):"));
    }

    #[test]
    fn class_name_defaults_with_empty_context() {
        let outcome = CodeGenerationAgent
            .attempt(&TaskRequest::new("class", "d"))
            .unwrap();
        assert!(outcome.text().unwrap().contains("class GeneratedClass:"));
    }

    #[test]
    fn snippet_renders_description_comment() {
        let outcome = CodeGenerationAgent
            .attempt(&TaskRequest::new("snippet", "Print a greeting"))
            .unwrap();
        let text = outcome.text().unwrap();
        assert!(text.starts_with("# Print a greeting\n"));
        assert!(text.ends_with("pass"));
    }

    #[test]
    fn code_generation_type_uses_snippet_template() {
        let outcome = CodeGenerationAgent
            .attempt(&TaskRequest::new("code_generation", "Sort a list"))
            .unwrap();
        assert!(outcome.text().unwrap().starts_with("# Sort a list\n"));
    }

    #[test]
    fn counts_generated_lines() {
        let outcome = CodeGenerationAgent.attempt(&function_task()).unwrap();
        let lines = outcome.metadata_value("lines_generated").unwrap();
        assert_eq!(lines.as_u64().unwrap(), 6);
        assert!(lines.as_u64().unwrap() >= 4);
    }

    #[test]
    fn wrong_family_context_falls_back_to_defaults() {
        let task = TaskRequest::new("function", "d").with_context(TaskContext::Analysis(
            crate::task::AnalysisOptions {
                code: "x".to_string(),
            },
        ));
        let outcome = CodeGenerationAgent.attempt(&task).unwrap();
        assert!(outcome.text().unwrap().contains("def generated_function()"));
    }
}
