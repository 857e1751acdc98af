use super::error::RepositoryError;
use crate::student::{normalize_roll, NewStudent, Student, StudentPatch};

/// Next id to assign: one past the largest id present, or 1 when empty.
///
/// Ids freed by deletion below the current maximum are never reused.
pub fn next_id(students: &[Student]) -> Result<u64, RepositoryError> {
    match students.iter().map(|s| s.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(RepositoryError::IdExhausted),
    }
}

/// First record whose normalized roll equals the normalized `roll`.
///
/// A blank roll never matches.
pub fn find_by_roll<'a>(students: &'a [Student], roll: &str) -> Option<&'a Student> {
    position_by_roll(students, roll).map(|i| &students[i])
}

fn position_by_roll(students: &[Student], roll: &str) -> Option<usize> {
    let key = normalize_roll(roll);
    if key.is_empty() {
        return None;
    }
    students.iter().position(|s| normalize_roll(&s.roll) == key)
}

/// Append `student`. The caller is responsible for roll uniqueness.
pub fn insert(students: &mut Vec<Student>, student: Student) {
    students.push(student);
}

/// Assign an id to `input` and append it, unless its roll is taken.
pub fn create(students: &mut Vec<Student>, input: NewStudent) -> Result<Student, RepositoryError> {
    if find_by_roll(students, &input.roll).is_some() {
        return Err(RepositoryError::Conflict(input.roll));
    }
    let student = Student::new(next_id(students)?, input);
    insert(students, student.clone());
    Ok(student)
}

/// Apply `patch` to the record matching `roll` and return the updated copy.
pub fn update(
    students: &mut [Student],
    roll: &str,
    patch: &StudentPatch,
) -> Result<Student, RepositoryError> {
    let index =
        position_by_roll(students, roll).ok_or_else(|| RepositoryError::NotFound(roll.to_string()))?;
    let student = &mut students[index];
    patch.apply(student);
    Ok(student.clone())
}

/// Remove every record matching `roll`. Returns how many were removed.
pub fn delete(students: &mut Vec<Student>, roll: &str) -> Result<usize, RepositoryError> {
    if position_by_roll(students, roll).is_none() {
        return Err(RepositoryError::NotFound(roll.to_string()));
    }
    let key = normalize_roll(roll);
    let before = students.len();
    students.retain(|s| normalize_roll(&s.roll) != key);
    Ok(before - students.len())
}
