//! The demonstration lessons
//!
//! Each lesson is a leaf: it takes no input, shares no state with the others,
//! and prints a handful of lines into a [`Transcript`]. Lessons are grouped by
//! topic:
//!
//! - [`basics`]: built-in types, word size, zero values, casting, bindings, constants
//! - [`structs`]: construction, padding and alignment, stack vs heap
//! - [`pointers`]: references, raw pointer steps, pass by value
//! - [`enums`]: explicit and shifted discriminants
//!
//! plus the XNOR report itself. Output is deterministic: nothing prints a raw
//! address, only distances between addresses.

pub mod basics;
pub mod enums;
pub mod pointers;
pub mod structs;

use rustc_hash::FxHashMap;

use crate::errors::CliError;
use crate::transcript::Transcript;
use crate::xnor::{XnorMode, XnorReport};

/// Handle a lesson writes through; tags every line with the lesson's name
pub struct LessonOut<'a> {
    transcript: &'a mut Transcript,
    lesson: &'static str,
}

impl<'a> LessonOut<'a> {
    pub fn new(transcript: &'a mut Transcript, lesson: &'static str) -> Self {
        LessonOut { transcript, lesson }
    }

    /// Print one line
    pub fn line(&mut self, text: impl Into<String>) {
        self.transcript.println(text, self.lesson);
    }
}

/// A registered lesson
#[derive(Debug, Clone, Copy)]
pub struct Lesson {
    /// Stable kebab-case name used on the command line
    pub name: &'static str,
    pub title: &'static str,
    body: fn(&mut LessonOut),
}

impl Lesson {
    /// Run the lesson, appending its output to `transcript`
    pub fn run(&self, transcript: &mut Transcript) {
        let mut out = LessonOut::new(transcript, self.name);
        out.line(format!("{}:", self.title));
        (self.body)(&mut out);
    }
}

static LESSONS: &[Lesson] = &[
    Lesson {
        name: "builtin-types",
        title: "Built-in Types",
        body: basics::builtin_types,
    },
    Lesson {
        name: "word-size",
        title: "Word Size",
        body: basics::word_size,
    },
    Lesson {
        name: "zero-value",
        title: "Zero Values",
        body: basics::zero_value,
    },
    Lesson {
        name: "casting",
        title: "Casting and Conversion",
        body: basics::casting,
    },
    Lesson {
        name: "structs",
        title: "Struct Construction",
        body: structs::construction,
    },
    Lesson {
        name: "padding",
        title: "Padding and Alignment",
        body: structs::padding,
    },
    Lesson {
        name: "assigning",
        title: "Assigning Values",
        body: basics::assigning,
    },
    Lesson {
        name: "pointers",
        title: "Pointers",
        body: pointers::pointers,
    },
    Lesson {
        name: "pass-by-value",
        title: "Pass by Value",
        body: pointers::pass_by_value,
    },
    Lesson {
        name: "stack-heap",
        title: "Stack and Heap",
        body: structs::stack_heap,
    },
    Lesson {
        name: "constants",
        title: "Constants",
        body: basics::constants,
    },
    Lesson {
        name: "enums",
        title: "Enumerations",
        body: enums::enums,
    },
    Lesson {
        name: "xnor",
        title: "XNOR",
        body: xnor,
    },
];

/// All lessons in presentation order
pub fn all() -> &'static [Lesson] {
    LESSONS
}

/// Look a lesson up by its command-line name
pub fn find(name: &str) -> Result<&'static Lesson, CliError> {
    let index: FxHashMap<&str, &'static Lesson> = LESSONS.iter().map(|l| (l.name, l)).collect();
    index
        .get(name)
        .copied()
        .ok_or_else(|| CliError::UnknownLesson {
            name: name.to_string(),
        })
}

/// Run the given lessons in order, separated by blank lines
pub fn run_many<'a>(lessons: impl IntoIterator<Item = &'a Lesson>, transcript: &mut Transcript) {
    let mut previous: Option<&Lesson> = None;
    for lesson in lessons {
        // The separator belongs to the lesson it follows
        if let Some(prev) = previous {
            transcript.println("", prev.name);
        }
        lesson.run(transcript);
        previous = Some(lesson);
    }
}

/// Run every lesson
pub fn run_all(transcript: &mut Transcript) {
    run_many(LESSONS, transcript);
}

fn xnor(out: &mut LessonOut) {
    let shipped = XnorReport::new(10, 10, XnorMode::Scalar);
    out.line("Equality broadcast over 32 bits (what the original printed):");
    for line in shipped.lines() {
        out.line(format!("  {}", line));
    }

    out.line("True per-bit XNOR:");
    for (a, b) in [(10, 10), (10, 5)] {
        for line in XnorReport::new(a, b, XnorMode::Bitwise).lines() {
            out.line(format!("  {}", line));
        }
    }
}
