//! Field schema: declarative constraints for a single form field

/// Primitive kind a field coerces to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Date,
    /// Single value out of an allowed set
    Enum,
    /// Several values out of an allowed set
    MultiSelect,
}

impl FieldKind {
    /// Type name used in type mismatch messages
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::String | FieldKind::Enum => "string",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::MultiSelect => "list",
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, FieldKind::MultiSelect)
    }
}

/// Input control a field is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputControl {
    Text,
    Number,
    Date,
    /// Drop-down style single choice
    Select,
    /// Radio group single choice
    Radio,
    Checkboxes,
    Color,
}

impl InputControl {
    /// Controls edited by typing characters
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            InputControl::Text | InputControl::Number | InputControl::Date | InputControl::Color
        )
    }
}

/// An allowed value and its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl From<(&str, &str)> for Choice {
    fn from((value, label): (&str, &str)) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// One declarative validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    NumericType,
    DateType,
    EnumMembership(Vec<String>),
    Cardinality {
        min: Option<usize>,
        max: Option<usize>,
    },
    Email,
}

/// Declarative description of one form field.
///
/// Built with chained constructors:
///
/// ```ignore
/// FieldSchema::multi_select("skills", "Skills", [("html", "HTML"), ("css", "CSS")])
///     .min_items(1)
///     .max_items(3)
///     .required()
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub control: InputControl,
    pub placeholder: Option<String>,
    pub choices: Vec<Choice>,
    rules: Vec<Rule>,
}

impl FieldSchema {
    fn new(name: &str, label: &str, kind: FieldKind, control: InputControl) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            control,
            placeholder: None,
            choices: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Free text field
    pub fn string(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::String, InputControl::Text)
    }

    /// Numeric field, coerced from its text input
    pub fn number(name: &str, label: &str) -> Self {
        let mut field = Self::new(name, label, FieldKind::Number, InputControl::Number);
        field.rules.push(Rule::NumericType);
        field
    }

    /// Calendar date field, coerced from its text input
    pub fn date(name: &str, label: &str) -> Self {
        let mut field = Self::new(name, label, FieldKind::Date, InputControl::Date);
        field.rules.push(Rule::DateType);
        field
    }

    /// Single choice out of `choices`
    pub fn one_of<I, C>(name: &str, label: &str, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        let mut field = Self::new(name, label, FieldKind::Enum, InputControl::Select);
        field.set_choices(choices);
        field
    }

    /// Any number of choices out of `choices`
    pub fn multi_select<I, C>(name: &str, label: &str, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        let mut field = Self::new(name, label, FieldKind::MultiSelect, InputControl::Checkboxes);
        field.set_choices(choices);
        field
    }

    fn set_choices<I, C>(&mut self, choices: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        let allowed = self.choices.iter().map(|c| c.value.clone()).collect();
        self.rules.push(Rule::EnumMembership(allowed));
    }

    /// Mark as required; the check always runs first
    pub fn required(mut self) -> Self {
        if !self.is_required() {
            self.rules.insert(0, Rule::Required);
        }
        self
    }

    pub fn email(mut self) -> Self {
        self.rules.push(Rule::Email);
        self
    }

    pub fn min_items(mut self, min: usize) -> Self {
        self.set_cardinality(Some(min), None);
        self
    }

    pub fn max_items(mut self, max: usize) -> Self {
        self.set_cardinality(None, Some(max));
        self
    }

    fn set_cardinality(&mut self, new_min: Option<usize>, new_max: Option<usize>) {
        for rule in &mut self.rules {
            if let Rule::Cardinality { min, max } = rule {
                *min = new_min.or(*min);
                *max = new_max.or(*max);
                return;
            }
        }
        self.rules.push(Rule::Cardinality {
            min: new_min,
            max: new_max,
        });
    }

    /// Override the default input control for the kind
    pub fn control(mut self, control: InputControl) -> Self {
        self.control = control;
        self
    }

    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required))
    }

    pub fn allowed_values(&self) -> Option<&[String]> {
        self.rules.iter().find_map(|r| match r {
            Rule::EnumMembership(values) => Some(values.as_slice()),
            _ => None,
        })
    }

    pub fn cardinality(&self) -> Option<(Option<usize>, Option<usize>)> {
        self.rules.iter().find_map(|r| match r {
            Rule::Cardinality { min, max } => Some((*min, *max)),
            _ => None,
        })
    }

    /// Display label for an allowed value, falling back to the value itself
    pub fn choice_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.choices
            .iter()
            .find(|c| c.value == value)
            .map(|c| c.label.as_str())
            .unwrap_or(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_is_evaluated_first() {
        let field = FieldSchema::number("age", "Age").required();
        assert_eq!(field.rules(), &[Rule::Required, Rule::NumericType]);
    }

    #[test]
    fn test_required_twice_is_noop() {
        let field = FieldSchema::string("name", "Name").required().required();
        assert_eq!(field.rules(), &[Rule::Required]);
    }

    #[test]
    fn test_one_of_builds_allowed_set() {
        let field = FieldSchema::one_of("gender", "Gender", [("male", "Male"), ("female", "Female")]);
        assert_eq!(field.kind, FieldKind::Enum);
        assert_eq!(field.control, InputControl::Select);
        assert_eq!(
            field.allowed_values(),
            Some(&["male".to_string(), "female".to_string()][..])
        );
        assert_eq!(field.choice_label("female"), "Female");
        assert_eq!(field.choice_label("other"), "other");
    }

    #[test]
    fn test_min_and_max_merge_into_one_rule() {
        let field = FieldSchema::multi_select("skills", "Skills", [("html", "HTML")])
            .min_items(1)
            .max_items(3);
        assert_eq!(field.cardinality(), Some((Some(1), Some(3))));
        let count = field
            .rules()
            .iter()
            .filter(|r| matches!(r, Rule::Cardinality { .. }))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_control_override() {
        let field = FieldSchema::one_of("department", "Department", [("bsc", "BSC")])
            .control(InputControl::Radio);
        assert_eq!(field.control, InputControl::Radio);
    }

    #[test]
    fn test_text_like_controls() {
        assert!(InputControl::Color.is_text_like());
        assert!(InputControl::Date.is_text_like());
        assert!(!InputControl::Radio.is_text_like());
        assert!(!InputControl::Checkboxes.is_text_like());
    }
}
