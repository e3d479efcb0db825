// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The two stock curricula, as data. Both have the same seven tasks in the same order
//! (see [`TaskKind`]); they differ in wording and in the [`crate::GrammarPolicy`] that
//! decides which commands each task accepts.

use strum::IntoEnumIterator;

use crate::{CurriculumVariant, GrammarPolicy, InstructionFn, Task, TaskKind};

/// Number of tasks in every curriculum.
pub const TASK_COUNT: usize = 7;

struct TaskText {
    title: &'static str,
    instruction: InstructionFn,
    hint: &'static str,
}

/// Build the task table for `variant`, with grammars from `grammar`.
#[must_use]
pub fn curriculum(variant: CurriculumVariant, grammar: &GrammarPolicy) -> Vec<Task> {
    TaskKind::iter()
        .enumerate()
        .map(|(index, kind)| {
            let text = match variant {
                CurriculumVariant::Strict => strict_text(kind),
                CurriculumVariant::Lenient => lenient_text(kind),
            };
            Task::new(
                index,
                kind,
                text.title,
                text.instruction,
                text.hint,
                grammar.spec_for(kind),
            )
        })
        .collect()
}

fn strict_text(kind: TaskKind) -> TaskText {
    match kind {
        TaskKind::Power => TaskText {
            title: "Task 1: Initialize Power System",
            instruction: |_| {
                "The system is dark. Initialize the battery to supply voltage to the \
                 motherboard. Type: battery.powerOn()"
                    .into()
            },
            hint: "Call battery.powerOn() to enable the power distribution system.",
        },
        TaskKind::Fan => TaskText {
            title: "Task 2: Thermal Management",
            instruction: |_| {
                "CPU Heat Load: 24 Watts. Fan Efficiency: 0.008 Watts removed per RPM. \
                 Calculate the required RPM (Heat / Efficiency). Type: \
                 fan.start(speed=YOUR CALCULATED SPEED)"
                    .into()
            },
            hint: "Calculation: 24 ÷ 0.008 = 3000 RPM. Type: fan.start(speed=3000)",
        },
        TaskKind::Identity => TaskText {
            title: "Task 3: User Authentication",
            instruction: |_| {
                "Type your name using the virtual keyboard, then click ENTER to \
                 authenticate."
                    .into()
            },
            hint: "Use the on-screen keyboard below the motherboard visualization.",
        },
        TaskKind::Memory => TaskText {
            title: "Task 4: Multi-Channel Memory",
            instruction: |_| {
                "Store data in RAM. You can store multiple items by using different \
                 hexadecimal addresses (e.g., 0xA1, 0xB2). Try: ram.store(\"DATA\", 0xA1)"
                    .into()
            },
            hint: "ram.store(\"HELLO\", 0xA1) then run ram.store(\"WORLD\", 0xB2)",
        },
        TaskKind::Processor => TaskText {
            title: "Task 5: CPU Instruction Set",
            instruction: |_| {
                "Perform an operation. Supported ops: \"ADD\", \"SUB\", \"MUL\", \"DIV\". \
                 Execute: cpu.execute(\"MUL\", cycles=3)"
                    .into()
            },
            hint: "cpu.execute(\"ADD\", cycles=3) or cpu.execute(\"SUB\", cycles=2)",
        },
        TaskKind::Storage => TaskText {
            title: "Task 6: Storage Capacity Calculation",
            instruction: |_| {
                "Save a 2048x2048 texture with 32-bit color depth. Calculate file size in \
                 bytes: (W * H * Bits) / 8. Command: storage.write(\"tex.png\", size)"
                    .into()
            },
            hint: "Calculation: (2048 * 2048 * 32) / 8 = 16,777,216 bytes. Type: \
                   storage.write(\"tex.png\", 16777216)",
        },
        TaskKind::Display => TaskText {
            title: "Task 7: Display Bandwidth",
            instruction: |_| {
                "Configure display for 1920x1080 at 120Hz. Calculate pixel throughput \
                 (W * H * Hz). Command: screen.display(\"YOUR ANSWER px/s\")"
                    .into()
            },
            hint: "Calculation: 1920 * 1080 * 120 = 248,832,000. Type: \
                   screen.display(\"248832000 px/s\")",
        },
    }
}

fn lenient_text(kind: TaskKind) -> TaskText {
    match kind {
        TaskKind::Power => TaskText {
            title: "Task 1: Power On the System",
            instruction: |_| {
                "Before we can do anything, we need power! Type: battery.powerOn()".into()
            },
            hint: "Simply call battery.powerOn() with parentheses",
        },
        TaskKind::Fan => TaskText {
            title: "Task 2: Start the Cooling Fan",
            instruction: |name| {
                format!(
                    "Great{}! The CPU generates heat. Use the fan object to start cooling. \
                     Type: fan.start(speed=YOUR_NUMBER)",
                    name.map(|it| format!(", {it}")).unwrap_or_default()
                )
            },
            hint: "Remember: fan.start(speed=NUMBER) where speed is in RPM (try 1000-3000)",
        },
        TaskKind::Identity => TaskText {
            title: "Task 3: Type Your Name",
            instruction: |_| {
                "Click the keyboard keys below to type your name, then click Submit!".into()
            },
            hint: "Type your name using the keyboard and press the Submit button",
        },
        TaskKind::Memory => TaskText {
            title: "Task 4: Store Data in RAM",
            instruction: |name| {
                format!(
                    "{}! Now let's store some data. Type: ram.store(\"Hello World\")",
                    greet("Great to meet you", name)
                )
            },
            hint: "Format: ram.store(\"YOUR TEXT HERE\")",
        },
        TaskKind::Processor => TaskText {
            title: "Task 5: Activate CPU Processing",
            instruction: |name| {
                format!(
                    "{}! Execute a calculation. Type: cpu.execute(\"2 + 2\")",
                    greet("Excellent work", name)
                )
            },
            hint: "Use cpu.execute() with a calculation in quotes",
        },
        TaskKind::Storage => TaskText {
            title: "Task 6: Write to Storage",
            instruction: |name| {
                format!(
                    "{}! Save a file permanently. Type: storage.write(\"myfile.txt\", 1024)",
                    greet("Well done", name)
                )
            },
            hint: "Format: storage.write(filename, size_in_bytes)",
        },
        TaskKind::Display => TaskText {
            title: "Task 7: Display Message on Screen",
            instruction: |name| {
                format!(
                    "{}! Type: screen.display(\"Hardware Mastered!\")",
                    greet("Final task", name)
                )
            },
            hint: "Use screen.display() with text in quotes",
        },
    }
}

/// `"Well done, ADA"`, or just `"Well done"` before a name is committed.
fn greet(salutation: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{salutation}, {name}"),
        None => salutation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GrammarSpec, assert_eq2};

    #[test]
    fn test_tables_have_seven_tasks_in_order() {
        for (variant, policy) in [
            (CurriculumVariant::Strict, GrammarPolicy::strict()),
            (CurriculumVariant::Lenient, GrammarPolicy::lenient()),
        ] {
            let tasks = curriculum(variant, &policy);
            assert_eq2!(tasks.len(), TASK_COUNT);
            for (index, task) in tasks.iter().enumerate() {
                assert_eq2!(task.index, index);
                assert!(task.title.starts_with(&format!("Task {}:", index + 1)));
            }
            assert_eq2!(tasks[2].kind, TaskKind::Identity);
            assert_eq2!(tasks[2].grammar, GrammarSpec::Identity);
        }
    }

    #[test]
    fn test_strict_instructions_ignore_name() {
        let tasks = curriculum(CurriculumVariant::Strict, &GrammarPolicy::strict());
        assert_eq2!(tasks[4].instruction(Some("ADA")), tasks[4].instruction(None));
    }

    #[test]
    fn test_lenient_instructions_greet_by_name() {
        let tasks = curriculum(CurriculumVariant::Lenient, &GrammarPolicy::lenient());
        assert!(tasks[1].instruction(None).starts_with("Great! The CPU"));
        assert!(tasks[1].instruction(Some("ADA")).starts_with("Great, ADA! The CPU"));
        assert_eq2!(
            tasks[6].instruction(Some("ADA")),
            "Final task, ADA! Type: screen.display(\"Hardware Mastered!\")"
        );
        assert_eq2!(
            tasks[3].instruction(None),
            "Great to meet you! Now let's store some data. Type: ram.store(\"Hello World\")"
        );
    }
}
