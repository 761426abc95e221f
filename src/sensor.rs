// src/sensor.rs
//! Ready-made snippets showing one sensor condition in ladder logic, RAPID and
//! PLC structured text.

pub const USAGE: &str = "Usage: sensor <type> <action>\nExample: sensor digital when_on";
pub const UNKNOWN_SENSOR_TYPE: &str = "Unknown sensor type. Available types: digital, analog";
pub const UNKNOWN_DIGITAL_ACTION: &str = "Unknown action for digital sensor. Available actions: when_on";
pub const UNKNOWN_ANALOG_ACTION: &str = "Unknown action for analog sensor. Available actions: when_on";

pub const SENSOR_TYPES: [&str; 2] = ["digital", "analog"];
pub const ACTIONS: [&str; 1] = ["when_on"];

const DIGITAL_WHEN_ON: &str = r#"
PLC Ladder Logic:
|--[INPUT]--|--[OUTPUT]--|

ABB Robot:
IF DI_01 = 1 THEN
    ! Your action here
ENDIF

Siemens S7:
IF "Input_Bit" THEN
    // Your action here
END_IF"#;

const ANALOG_WHEN_ON: &str = r#"
PLC Ladder Logic:
|--[ANALOG_IN]--|--[SCALE]--|--[COMPARE]--|--[OUTPUT]--|

ABB Robot:
IF AI_01 > SET_POINT THEN
    ! Your action here
ENDIF

Siemens S7:
IF "Analog_Input" > "Set_Point" THEN
    // Your action here
END_IF"#;

pub fn generate(args: &[&str]) -> String {
    match args {
        [sensor_type, action, ..] => snippet(sensor_type, action).to_string(),
        _ => USAGE.to_string(),
    }
}

pub fn snippet(sensor_type: &str, action: &str) -> &'static str {
    match (sensor_type, action) {
        ("digital", "when_on") => DIGITAL_WHEN_ON,
        ("digital", _) => UNKNOWN_DIGITAL_ACTION,
        ("analog", "when_on") => ANALOG_WHEN_ON,
        ("analog", _) => UNKNOWN_ANALOG_ACTION,
        _ => UNKNOWN_SENSOR_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_three_blocks(text: &str) {
        for heading in ["PLC Ladder Logic:", "ABB Robot:", "Siemens S7:"] {
            assert!(text.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn digital_when_on_has_all_syntaxes() {
        let text = generate(&["digital", "when_on"]);
        assert_three_blocks(&text);
        assert!(text.contains("IF DI_01 = 1 THEN"));
    }

    #[test]
    fn analog_when_on_has_all_syntaxes() {
        let text = generate(&["analog", "when_on"]);
        assert_three_blocks(&text);
        assert!(text.contains("IF AI_01 > SET_POINT THEN"));
    }

    #[test]
    fn unknown_combinations_get_fixed_messages() {
        assert_eq!(generate(&["digital", "unknown_action"]), UNKNOWN_DIGITAL_ACTION);
        assert_eq!(generate(&["analog", "when_off"]), UNKNOWN_ANALOG_ACTION);
        assert_eq!(generate(&["unknown_type", "x"]), UNKNOWN_SENSOR_TYPE);
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(generate(&["Digital", "when_on"]), UNKNOWN_SENSOR_TYPE);
        assert_eq!(generate(&["digital", "WHEN_ON"]), UNKNOWN_DIGITAL_ACTION);
    }

    #[test]
    fn missing_arguments_print_usage() {
        assert_eq!(generate(&[]), USAGE);
        assert_eq!(generate(&["digital"]), USAGE);
    }
}
