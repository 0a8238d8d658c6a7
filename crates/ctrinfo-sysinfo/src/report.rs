//! Text rendering of a hardware report

use ctrinfo_hal::{Fact, HardwareReport, Screen, auto_brightness_label, sound_output_label};
use std::fmt::Write;

const UNAVAILABLE: &str = "unavailable";

pub fn render_text(console: &str, report: &HardwareReport) -> String {
    let mut lines = vec![(
        "Console",
        format!("{} ({} revision)", console, report.revision.name()),
    )];

    for screen in Screen::all() {
        let panel = match &report.screens {
            Fact::Reported(types) => types.get(*screen).label(),
            Fact::Unavailable(_) => UNAVAILABLE,
        };
        lines.push((panel_label(*screen), panel.to_string()));
    }

    for screen in Screen::all() {
        let brightness = match report.brightness(*screen) {
            Fact::Reported(value) => value.to_string(),
            Fact::Unavailable(_) => UNAVAILABLE.to_string(),
        };
        lines.push((brightness_label(*screen), brightness));
    }

    lines.push((
        "Headphones",
        inserted(report.audio_jack_inserted.clone().or_fallback()).to_string(),
    ));
    lines.push((
        "Game card",
        inserted(report.card_inserted.clone().or_fallback()).to_string(),
    ));
    lines.push((
        "Card type",
        report.card_type.clone().or_fallback().label().to_string(),
    ));
    lines.push((
        "SD card",
        inserted(report.sd_inserted.clone().or_fallback()).to_string(),
    ));
    lines.push((
        "Sound output",
        sound_output_label(&report.sound_output).to_string(),
    ));
    lines.push((
        "Auto-brightness",
        auto_brightness_label(&report.auto_brightness).to_string(),
    ));

    let mut out = String::new();
    for (label, value) in lines {
        let _ = writeln!(out, "{:<20}{}", format!("{}:", label), value);
    }
    out
}

fn panel_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Top => "Top screen",
        Screen::Bottom => "Bottom screen",
    }
}

fn brightness_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Top => "Top brightness",
        Screen::Bottom => "Bottom brightness",
    }
}

fn inserted(value: bool) -> &'static str {
    if value { "inserted" } else { "not inserted" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctrinfo_hal::HardwareFacts;
    use ctrinfo_hal::ResultCode;
    use ctrinfo_hal::mock::{MockFault, MockHal, MockProfile};

    fn line<'a>(text: &'a str, label: &str) -> &'a str {
        text.lines()
            .find(|l| l.starts_with(&format!("{}:", label)))
            .map(|l| l[20..].trim())
            .unwrap_or_default()
    }

    #[test]
    fn test_render_new_3ds_xl() {
        let hal = MockHal::new(MockProfile::New3dsXl);
        let report = HardwareFacts::new(&hal).snapshot();
        let text = render_text("New 3DS XL", &report);

        assert_eq!(line(&text, "Console"), "New 3DS XL (New revision)");
        assert_eq!(line(&text, "Top screen"), "IPS");
        assert_eq!(line(&text, "Bottom screen"), "TN");
        assert_eq!(line(&text, "Top brightness"), "142");
        assert_eq!(line(&text, "Headphones"), "not inserted");
        assert_eq!(line(&text, "Game card"), "inserted");
        assert_eq!(line(&text, "Card type"), "CTR (3DS)");
        assert_eq!(line(&text, "Sound output"), "Stereo");
        assert_eq!(line(&text, "Auto-brightness"), "disabled");
    }

    #[test]
    fn test_render_failures() {
        let hal = MockHal::new(MockProfile::New3ds);
        let code = ResultCode(0xC880_3F9F);
        hal.inject_fault(MockFault::LcdOpen, code);
        hal.inject_fault(MockFault::GpuReadRegs, code);
        hal.inject_fault(MockFault::FsOpen, code);
        hal.inject_fault(MockFault::CfgBlock, code);

        let report = HardwareFacts::new(&hal).snapshot();
        let text = render_text("New 3DS", &report);

        assert_eq!(line(&text, "Top screen"), "unavailable");
        assert_eq!(line(&text, "Bottom brightness"), "unavailable");
        assert_eq!(line(&text, "Game card"), "not inserted");
        assert_eq!(line(&text, "SD card"), "not inserted");
        assert_eq!(line(&text, "Card type"), "CTR (3DS)");
        assert_eq!(line(&text, "Sound output"), "unknown");
        assert_eq!(line(&text, "Auto-brightness"), "unknown");
    }

    #[test]
    fn test_render_original_revision() {
        let hal = MockHal::new(MockProfile::Old2ds);
        let report = HardwareFacts::new(&hal).snapshot();
        let text = render_text("2DS", &report);

        assert_eq!(line(&text, "Console"), "2DS (Original revision)");
        assert_eq!(line(&text, "Top screen"), "TN");
        assert_eq!(line(&text, "Sound output"), "Mono");
    }
}
