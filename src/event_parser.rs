use winnow::prelude::*;
use winnow::ascii::{float, line_ending, space0, space1, till_line_ending};
use winnow::combinator::{alt, eof, repeat};

use crate::error::Error;
use crate::viewport::{Bounds, PointerInput, ViewportEvent, WheelInput};

pub fn parse_script(input: &str) -> crate::Result<Vec<ViewportEvent>> {
    let mut rest = input;
    script(&mut rest).map_err(|_| {
        let consumed = &input[..input.len() - rest.len()];
        let context = rest.lines().next().unwrap_or("").trim();
        let context = if context.len() > 40 {
            let cut = context
                .char_indices()
                .nth(40)
                .map_or(context.len(), |(i, _)| i);
            format!("{}...", &context[..cut])
        } else {
            context.to_string()
        };
        Error::Script {
            line: consumed.matches('\n').count() + 1,
            context,
        }
    })
}

fn script(input: &mut &str) -> winnow::Result<Vec<ViewportEvent>> {
    let lines: Vec<Option<ViewportEvent>> = repeat(0.., script_line).parse_next(input)?;
    space0.parse_next(input)?;
    eof.parse_next(input)?;
    Ok(lines.into_iter().flatten().collect())
}

fn script_line(input: &mut &str) -> winnow::Result<Option<ViewportEvent>> {
    space0.parse_next(input)?;

    if input.is_empty() {
        return Err(winnow::error::ParserError::from_input(input));
    }

    alt((
        comment_line.map(|_| None),
        blank_line.map(|_| None),
        event_line.map(Some),
    ))
    .parse_next(input)
}

fn comment_line(input: &mut &str) -> winnow::Result<()> {
    "%%".parse_next(input)?;
    till_line_ending.parse_next(input)?;
    end_of_line.parse_next(input)
}

fn blank_line(input: &mut &str) -> winnow::Result<()> {
    line_ending.void().parse_next(input)
}

fn end_of_line(input: &mut &str) -> winnow::Result<()> {
    space0.parse_next(input)?;
    alt((line_ending.void(), eof.void())).parse_next(input)
}

fn event_line(input: &mut &str) -> winnow::Result<ViewportEvent> {
    let event = alt((
        wheel,
        pointer("down").map(ViewportEvent::MouseDown),
        pointer("move").map(ViewportEvent::MouseMove),
        "up".value(ViewportEvent::MouseUp),
        zoom,
        fit,
        "reset".value(ViewportEvent::Reset),
    ))
    .parse_next(input)?;
    end_of_line.parse_next(input)?;
    Ok(event)
}

fn number(input: &mut &str) -> winnow::Result<f64> {
    float.parse_next(input)
}

fn wheel(input: &mut &str) -> winnow::Result<ViewportEvent> {
    "wheel".parse_next(input)?;
    space1.parse_next(input)?;
    let delta_y = number.parse_next(input)?;
    let (client_x, client_y) = coordinates.parse_next(input)?;
    Ok(ViewportEvent::Wheel(WheelInput {
        delta_y,
        client_x,
        client_y,
    }))
}

fn coordinates(input: &mut &str) -> winnow::Result<(f64, f64)> {
    space1.parse_next(input)?;
    let x = number.parse_next(input)?;
    space1.parse_next(input)?;
    let y = number.parse_next(input)?;
    Ok((x, y))
}

fn pointer(
    mut keyword: &'static str,
) -> impl FnMut(&mut &str) -> winnow::Result<PointerInput> {
    move |input: &mut &str| {
        keyword.parse_next(input)?;
        let (client_x, client_y) = coordinates.parse_next(input)?;
        Ok(PointerInput { client_x, client_y })
    }
}

fn zoom(input: &mut &str) -> winnow::Result<ViewportEvent> {
    "zoom".parse_next(input)?;
    space1.parse_next(input)?;
    alt((
        "in".value(ViewportEvent::ZoomIn),
        "out".value(ViewportEvent::ZoomOut),
    ))
    .parse_next(input)
}

fn fit(input: &mut &str) -> winnow::Result<ViewportEvent> {
    "fit".parse_next(input)?;
    let (x, y) = coordinates.parse_next(input)?;
    let (width, height) = coordinates.parse_next(input)?;
    Ok(ViewportEvent::Fit(Bounds::new(x, y, width, height)))
}
