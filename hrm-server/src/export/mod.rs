//! 台账导出
//!
//! 将考勤/薪资记录渲染为下载文件：
//! - [`csv::attendance_csv`] - 考勤 CSV
//! - [`excel::salary_workbook`] - 薪资 Excel 工作簿
//! - [`pdf::salary_report`] - 薪资 PDF 报表
//!
//! 纯格式化函数，输入记录切片，输出文件字节。

pub mod csv;
pub mod excel;
pub mod pdf;

pub use csv::attendance_csv;
pub use excel::salary_workbook;
pub use pdf::salary_report;
