// src/abb/commands.rs

/// A single RAPID instruction with its syntax and a short usage example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: &'static str,
    pub syntax: &'static str,
    pub example: &'static str,
    pub description: &'static str,
}

impl CommandEntry {
    pub fn render(&self) -> String {
        format!(
            "\nCommand: {}\nSyntax: {}\n\nExample:\n{}\n\nDescription:\n{}",
            self.name, self.syntax, self.example, self.description
        )
    }
}

pub static COMMANDS: &[(&str, CommandEntry)] = &[
    (
        "move_j",
        CommandEntry {
            name: "MoveJ",
            syntax: "MoveJ ToPoint, Speed, Zone, Tool [\\WObj];",
            example: "MoveJ pHome, v1000, z50, tool1;",
            description: "Joint movement - moves robot to position using axis movement",
        },
    ),
    (
        "move_l",
        CommandEntry {
            name: "MoveL",
            syntax: "MoveL ToPoint, Speed, Zone, Tool [\\WObj];",
            example: "MoveL pPick, v100, fine, tool1 \\WObj:=wobj1;",
            description: "Linear movement - moves robot in straight line to position",
        },
    ),
    (
        "move_c",
        CommandEntry {
            name: "MoveC",
            syntax: "MoveC CirPoint, ToPoint, Speed, Zone, Tool [\\WObj];",
            example: "MoveC pMid, pEnd, v200, z1, tool1;",
            description: "Circular movement - moves the TCP along an arc through a circle point",
        },
    ),
    (
        "move_abs_j",
        CommandEntry {
            name: "MoveAbsJ",
            syntax: "MoveAbsJ ToJointPos, Speed, Zone, Tool;",
            example: "MoveAbsJ jHome, v500, fine, tool0;",
            description: "Absolute joint movement - moves axes to given joint angles",
        },
    ),
    (
        "set_do",
        CommandEntry {
            name: "SetDO",
            syntax: "SetDO Signal, Value;",
            example: "SetDO do_Gripper, 1;",
            description: "Sets digital output signal",
        },
    ),
    (
        "reset_do",
        CommandEntry {
            name: "Reset",
            syntax: "Reset Signal;",
            example: "Reset do_Gripper;",
            description: "Sets a digital output signal to zero",
        },
    ),
    (
        "pulse_do",
        CommandEntry {
            name: "PulseDO",
            syntax: "PulseDO [\\PLength] Signal;",
            example: "PulseDO \\PLength:=0.5, do_Reset;",
            description: "Generates a pulse on a digital output signal",
        },
    ),
    (
        "wait_di",
        CommandEntry {
            name: "WaitDI",
            syntax: "WaitDI Signal, Value [\\MaxTime] [\\TimeFlag];",
            example: "WaitDI di_PartPresent, 1 \\MaxTime:=5;",
            description: "Waits for digital input signal to reach specified value",
        },
    ),
    (
        "wait_time",
        CommandEntry {
            name: "WaitTime",
            syntax: "WaitTime [\\InPos] Time;",
            example: "WaitTime \\InPos, 0.5;",
            description: "Waits a given number of seconds before continuing",
        },
    ),
    (
        "tp_write",
        CommandEntry {
            name: "TPWrite",
            syntax: "TPWrite String [\\Num] [\\Bool] [\\Pos] [\\Orient];",
            example: "TPWrite \"Cycle count: \" \\Num:=counter;",
            description: "Writes text to the FlexPendant display",
        },
    ),
    (
        "if_statement",
        CommandEntry {
            name: "IF",
            syntax: "IF condition THEN ... [ELSEIF condition THEN ...] [ELSE ...] ENDIF",
            example: "IF di_Ready = 1 THEN\n    MoveL pPick, v100, fine, tool1;\nELSE\n    TPWrite \"Waiting for part\";\nENDIF",
            description: "Conditional execution of instructions",
        },
    ),
    (
        "for_loop",
        CommandEntry {
            name: "FOR",
            syntax: "FOR counter FROM start TO end [STEP step] DO ... ENDFOR",
            example: "FOR i FROM 1 TO 5 DO\n    MoveL Offs(pBase, i*50, 0, 0), v200, fine, tool1;\nENDFOR",
            description: "Repeats instructions a fixed number of times",
        },
    ),
    (
        "while_loop",
        CommandEntry {
            name: "WHILE",
            syntax: "WHILE condition DO ... ENDWHILE",
            example: "WHILE di_Stop = 0 DO\n    Cycle;\nENDWHILE",
            description: "Repeats instructions as long as a condition holds",
        },
    ),
];
