//! 成绩表单解析。
//!
//! 表单中 `subject`、`credit`、`grade` 字段会重复出现，每组对应一门课程。

use sgpa_core::domain::StudentIdentity;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculateForm {
    pub student: StudentIdentity,
    pub subjects: Vec<String>,
    pub credits: Vec<String>,
    pub grades: Vec<String>,
}

impl CalculateForm {
    /// 从 url-encoded 键值对构建表单，保留重复字段的顺序。未知字段会被忽略。
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.student.name = value.trim().to_string(),
                "rollno" => form.student.roll_number = value.trim().to_string(),
                "department" => form.student.department = value.trim().to_string(),
                "semester" => form.student.semester = value.trim().to_string(),
                "subject" => form.subjects.push(value.trim().to_string()),
                "credit" => form.credits.push(value),
                "grade" => form.grades.push(value),
                _ => {}
            }
        }

        form
    }
}
