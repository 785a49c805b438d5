/// (persona key, landmark key or `None` for general, questions)
pub(super) const SUGGESTIONS: &[(&str, Option<&str>, [&str; 3])] = &[
    (
        "king_rama_pandya",
        None,
        [
            "What was daily life like in your palace?",
            "Tell me about the wars you fought",
            "What festivals did your kingdom celebrate?",
        ],
    ),
    (
        "king_rama_pandya",
        Some("nellaiappar_temple"),
        [
            "Did you commission any part of this temple?",
            "What offerings did you make to Lord Shiva?",
            "Tell me about the artisans who carved these pillars",
        ],
    ),
    (
        "temple_priest",
        None,
        [
            "What is the most sacred part of this temple?",
            "Tell me about the daily rituals you perform",
            "Have you witnessed any miracles here?",
        ],
    ),
    (
        "temple_priest",
        Some("nellaiappar_temple"),
        [
            "How do the musical pillars work?",
            "What is the story of Lord Nellaiappar?",
            "What happens during the Arudra Darshan festival?",
        ],
    ),
    (
        "british_collector",
        None,
        [
            "What surprised you most about India?",
            "How does this compare to buildings in England?",
            "What did you write in your journals?",
        ],
    ),
    (
        "british_collector",
        Some("krishnapuram_palace"),
        [
            "What do you think of the Gajendra Moksha mural?",
            "How does this palace compare to European ones?",
            "What artifacts did you find most interesting?",
        ],
    ),
    (
        "freedom_fighter",
        None,
        [
            "Why did you refuse to pay tribute to the British?",
            "Tell me about your soldiers",
            "What does freedom mean to you?",
        ],
    ),
    (
        "freedom_fighter",
        Some("panchalankurichi"),
        [
            "What memories do you have of this fort?",
            "How did you prepare for battle here?",
            "Tell me about your last stand",
        ],
    ),
    (
        "shah_jahan",
        Some("taj_mahal"),
        [
            "Why did you build this place?",
            "Who designed the great dome?",
            "What was Mumtaz Mahal like?",
        ],
    ),
];

pub(super) const GENERAL: [&str; 3] = [
    "Tell me about yourself",
    "What was life like in your time?",
    "What should I know about this place?",
];
