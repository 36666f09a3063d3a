use serde::Serialize;

/// A labelled example shown alongside the predictor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleStudent {
    pub name: &'static str,
    pub cgpa: f64,
    pub iq: u32,
    pub placement: u8,
}

const fn student(name: &'static str, cgpa: f64, iq: u32, placement: u8) -> SampleStudent {
    SampleStudent {
        name,
        cgpa,
        iq,
        placement,
    }
}

pub const SAMPLE_STUDENTS: [SampleStudent; 10] = [
    student("Rahul", 6.8, 123, 1),
    student("Priya", 5.9, 106, 0),
    student("Amit", 5.3, 121, 0),
    student("Sneha", 7.4, 132, 1),
    student("Vikram", 5.8, 142, 0),
    student("Neha", 8.1, 135, 1),
    student("Raj", 7.2, 128, 1),
    student("Anjali", 6.5, 118, 1),
    student("Karan", 5.5, 110, 0),
    student("Pooja", 7.8, 140, 1),
];
