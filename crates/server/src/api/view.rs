//! HTML 页面渲染。

use sgpa_core::domain::{LetterGrade, SgpaCalculation, StudentIdentity, SubmissionId};

use crate::repository::{GradeRecord, SubmissionSummary};

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse;width:100%;margin-bottom:1.5rem}\
th,td{border:1px solid #ccc;padding:.4rem .6rem;text-align:left}\
th{background:#f2f2f2}.error{color:#b00020}.sgpa{font-size:1.4rem}";

/// 转义 HTML 特殊字符。
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n\
         <p><a href=\"/\">New calculation</a> | <a href=\"/view-records\">View records</a></p>\n\
         </body>\n</html>\n",
        title = escape_html(title),
    )
}

fn grade_options() -> String {
    LetterGrade::ALL
        .iter()
        .map(|g| format!("<option value=\"{0}\">{0}</option>", escape_html(g.symbol())))
        .collect()
}

/// 成绩录入表单。
pub fn index_page() -> String {
    let row = format!(
        "<tr><td><input name=\"subject\" required></td>\
         <td><input name=\"credit\" type=\"number\" min=\"0\" required></td>\
         <td><select name=\"grade\">{}</select></td></tr>",
        grade_options()
    );

    let body = format!(
        "<h1>SGPA Calculator</h1>\n\
         <form method=\"post\" action=\"/calculate\">\n\
         <p><label>Name <input name=\"name\" required></label></p>\n\
         <p><label>Roll number <input name=\"rollno\" required></label></p>\n\
         <p><label>Department <input name=\"department\" required></label></p>\n\
         <p><label>Semester <input name=\"semester\" required></label></p>\n\
         <table id=\"subjects\">\n<tr><th>Subject</th><th>Credit</th><th>Grade</th></tr>\n\
         {row}\n</table>\n\
         <button type=\"button\" onclick=\"var t=document.getElementById('subjects');\
         t.appendChild(t.rows[1].cloneNode(true));\">Add subject</button>\n\
         <button type=\"submit\">Calculate SGPA</button>\n</form>"
    );

    layout("SGPA Calculator", &body)
}

fn student_block(student: &StudentIdentity) -> String {
    format!(
        "<p><strong>Name:</strong> {}<br><strong>Roll number:</strong> {}<br>\
         <strong>Department:</strong> {}<br><strong>Semester:</strong> {}</p>\n",
        escape_html(&student.name),
        escape_html(&student.roll_number),
        escape_html(&student.department),
        escape_html(&student.semester),
    )
}

/// 计算结果页。
pub fn result_page(
    student: &StudentIdentity,
    calculation: &SgpaCalculation,
    submission_id: SubmissionId,
) -> String {
    let mut body = String::from("<h1>SGPA Result</h1>\n");
    body.push_str(&student_block(student));

    body.push_str("<table>\n<tr><th>Subject</th><th>Credit</th><th>Grade</th><th>Points</th></tr>\n");
    for entry in &calculation.entries {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&entry.subject),
            entry.credit,
            escape_html(entry.grade.as_str()),
            entry.points,
        ));
    }
    body.push_str("</table>\n");

    body.push_str(&format!(
        "<p>Total credits: {}</p>\n<p class=\"sgpa\"><strong>SGPA: {}</strong></p>\n\
         <p><small>Submission {}</small></p>",
        calculation.total_credits, calculation.sgpa, submission_id,
    ));

    layout("SGPA Result", &body)
}

/// 历史记录页：提交汇总表与明细表。
pub fn records_page(summaries: &[SubmissionSummary], records: &[GradeRecord]) -> String {
    let mut body = String::from("<h1>Student Records</h1>\n<h2>Submissions</h2>\n");

    if summaries.is_empty() {
        body.push_str("<p>No records yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>Name</th><th>Roll number</th><th>Department</th>\
             <th>Semester</th><th>Subjects</th><th>SGPA</th></tr>\n",
        );
        for summary in summaries {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&summary.student.name),
                escape_html(&summary.student.roll_number),
                escape_html(&summary.student.department),
                escape_html(&summary.student.semester),
                summary.subject_count,
                summary.sgpa,
            ));
        }
        body.push_str("</table>\n");
    }

    body.push_str("<h2>All subject rows</h2>\n");
    if !records.is_empty() {
        body.push_str(
            "<table>\n<tr><th>ID</th><th>Name</th><th>Roll number</th><th>Department</th>\
             <th>Semester</th><th>Subject</th><th>Credit</th><th>Grade</th><th>Points</th>\
             <th>SGPA</th><th>Recorded</th></tr>\n",
        );
        for record in records {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                record.id,
                escape_html(&record.student.name),
                escape_html(&record.student.roll_number),
                escape_html(&record.student.department),
                escape_html(&record.student.semester),
                escape_html(&record.subject),
                record.credit,
                escape_html(record.grade.as_str()),
                record.points,
                record.sgpa,
                record.created_at.format("%Y-%m-%d %H:%M"),
            ));
        }
        body.push_str("</table>\n");
    }

    layout("Student Records", &body)
}

/// 错误页。
pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h3 class=\"error\">Error: {}</h3>",
        escape_html(message)
    );
    layout("Error", &body)
}
