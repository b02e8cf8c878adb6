use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 服务未返回文档也未返回建议时的占位文本
pub const PLACEHOLDER_TEXT: &str = "No documentation returned.";

/// 请求失败时展示的固定文本
pub const FAILURE_TEXT: &str = "Something went wrong. Please try again.";

/// POST /generate-doc 的请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocRequest {
    pub code: String,
}

/// 输出内容的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Documentation, // doc 字段
    Suggestions,   // suggestions 字段
    Placeholder,
    Failure,
}

impl OutputKind {
    pub fn label(&self) -> &'static str {
        match self {
            OutputKind::Documentation => "Documentation",
            OutputKind::Suggestions => "Suggestions",
            OutputKind::Placeholder => "Empty",
            OutputKind::Failure => "Failed",
        }
    }
}

/// 服务返回的 JSON 对象
///
/// `doc` 与 `suggestions` 保留原始 JSON 值，取值规则见 [`DocResponse::resolve`]。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocResponse {
    pub doc: Value,
    pub suggestions: Value,
    pub code_structure: Option<CodeStructure>,
}

impl DocResponse {
    /// 从响应对象构造，无法解析的 `code_structure` 直接忽略
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        let code_structure = object
            .remove("code_structure")
            .and_then(|value| serde_json::from_value(value).ok());

        Self {
            doc: object.remove("doc").unwrap_or(Value::Null),
            suggestions: object.remove("suggestions").unwrap_or(Value::Null),
            code_structure,
        }
    }

    /// 依次取 doc、suggestions，都不存在时返回占位文本
    pub fn resolve(&self) -> (OutputKind, String) {
        if let Some(text) = display_text(&self.doc) {
            return (OutputKind::Documentation, text);
        }
        if let Some(text) = display_text(&self.suggestions) {
            return (OutputKind::Suggestions, text);
        }
        (OutputKind::Placeholder, PLACEHOLDER_TEXT.to_string())
    }
}

/// 空值（null、false、0、空字符串）视为缺失；字符串原样返回，其余值按 JSON 文本展示
fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// 服务端对提交代码的静态分析结果
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CodeStructure {
    #[serde(default)]
    pub functions: Vec<FunctionInfo>,
    #[serde(default)]
    pub classes: Vec<ClassInfo>,
    #[serde(default)]
    pub imports: Vec<String>,
    /// 分析失败（如语法错误）时的原因
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub returns: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<String>,
}

impl CodeStructure {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
            && self.classes.is_empty()
            && self.imports.is_empty()
            && self.error.is_none()
    }
}

impl FunctionInfo {
    /// 形如 `name(a, b) -> T` 的签名
    pub fn signature(&self) -> String {
        let args = self.args.join(", ");
        match &self.returns {
            Some(ret) => format!("{}({}) -> {}", self.name, args, ret),
            None => format!("{}({})", self.name, args),
        }
    }
}
