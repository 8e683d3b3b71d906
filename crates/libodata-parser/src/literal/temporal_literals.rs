//! Date, date-time-offset and time-of-day literals.

use crate::lexer::byte_at;
use crate::lexer::colon;
use crate::lexer::day;
use crate::lexer::fractional_seconds;
use crate::lexer::hour;
use crate::lexer::minute;
use crate::lexer::month;
use crate::lexer::second;
use crate::lexer::sign;
use crate::lexer::year;
use crate::literal::edm_literal;
use crate::token::EdmType;
use crate::token::ODataToken;

/// `year "-" month "-" day`, returning the offset after the day.
fn date_part(source: &[u8], index: usize) -> Option<usize> {
    let year_end = year(source, index)?;
    if byte_at(source, year_end)? != b'-' {
        return None;
    }
    let month_end = month(source, year_end + 1)?;
    if byte_at(source, month_end)? != b'-' {
        return None;
    }
    day(source, month_end + 1)
}

/// `hour ":" minute [ ":" second [ "." fractionalSeconds ] ]`
///
/// A colon after the minute commits to seconds, and a `.` after the
/// seconds commits to a fraction.
fn time_part(source: &[u8], index: usize) -> Option<usize> {
    let hour_end = hour(source, index)?;
    let minute_start = colon(source, hour_end)?;
    let minute_end = minute(source, minute_start)?;

    let Some(second_start) = colon(source, minute_end) else {
        return Some(minute_end);
    };
    let second_end = second(source, second_start)?;
    if byte_at(source, second_end) == Some(b'.') {
        fractional_seconds(source, second_end + 1)
    } else {
        Some(second_end)
    }
}

/// `dateValue = year "-" month "-" day`
///
/// No match when a `T` follows the day: that input is a date-time-offset.
pub fn date_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let end = date_part(source, index)?;
    if byte_at(source, end) == Some(b'T') {
        return None;
    }
    Some(edm_literal(source, index, end, EdmType::Date))
}

/// `dateTimeOffsetValue = year "-" month "-" day "T" hour ":" minute
/// [ ":" second [ "." fractionalSeconds ] ] ( "Z" / SIGN hour ":" minute )`
pub fn date_time_offset_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let date_end = date_part(source, index)?;
    if byte_at(source, date_end)? != b'T' {
        return None;
    }
    let time_end = time_part(source, date_end + 1)?;

    let end = if byte_at(source, time_end) == Some(b'Z') {
        time_end + 1
    } else {
        let offset_hour_start = sign(source, time_end)?;
        let offset_hour_end = hour(source, offset_hour_start)?;
        let offset_minute_start = colon(source, offset_hour_end)?;
        minute(source, offset_minute_start)?
    };
    Some(edm_literal(source, index, end, EdmType::DateTimeOffset))
}

/// `timeOfDayValue = hour ":" minute [ ":" second [ "." fractionalSeconds ] ]`
pub fn time_of_day_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let end = time_part(source, index)?;
    Some(edm_literal(source, index, end, EdmType::TimeOfDay))
}
