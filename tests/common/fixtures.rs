use serde_json::{Value, json};

/// A rule-table snapshot with one investor pattern and matching style rows.
pub fn investor_catalog() -> Value {
    json!({
        "patterns": [
            {
                "Pattern_Name": "Seed Pitch",
                "Pattern_Category": "Investor Pitch",
                "Duration_Range_Min": "5",
                "Duration_Range_Max": "20",
                "Slide_Count_Min": "10",
                "Slide_Count_Max": "14",
                "Structure_Format": "Opening→Problem→Solution→Traction→Team→Closing",
                "Tone": "Persuasive, Professional",
                "Animation_Intensity": "Medium",
                "Transition_Style": "Slide",
                "Key_Components": "Problem,Solution,Traction",
                "Common_Pitfalls": "Too many numbers + Vague ask",
                "Primary_Style": "Bold + Minimalism",
                "Color_Mood": "trust",
                "Typography_Mood": "confident modern"
            }
        ],
        "styles": [
            {
                "Style_Category": "Bold Minimalism",
                "Presentation_Suitability": "Very High",
                "Slide_Title_Size": "40-48pt",
                "Slide_Body_Size": "22-28pt"
            }
        ],
        "colors": [
            {
                "Product_Type": "Finance Trust",
                "Keywords": "trust, finance, fintech",
                "Primary_Hex": "#0A2540",
                "Secondary_Hex": "#635BFF",
                "CTA_Hex": "#00D924",
                "Projector_Primary": "#0A2540",
                "Projector_Background": "#FFFFFF",
                "Projector_Text": "#1A1A1A",
                "Projector_Safety": "Yes",
                "Contrast_Ratio": "14:1",
                "Projector_Notes": "High contrast"
            }
        ],
        "typography": [
            {
                "Font_Pairing_Name": "Confident Sans",
                "Heading_Font": "Montserrat",
                "Body_Font": "Source Sans Pro",
                "Slide_Title_Size": "40-48pt",
                "Slide_Body_Size": "22-26pt",
                "Mood_Style_Keywords": "Confident, bold",
                "Best_For_Presentation": "Investor pitch decks"
            }
        ],
        "speechNotes": [
            {
                "Slide_Type": "Content Slide",
                "Note_Template": "One idea per slide; pause after the number."
            }
        ]
    })
}

/// Two patterns that score identically for a 20-minute professional business talk.
pub fn tied_patterns_catalog() -> Value {
    json!({
        "patterns": [
            {
                "Pattern_Name": "First Business",
                "Pattern_Category": "business",
                "Duration_Range_Min": "10",
                "Duration_Range_Max": "30",
                "Tone": "Professional"
            },
            {
                "Pattern_Name": "Second Business",
                "Pattern_Category": "business",
                "Duration_Range_Min": "10",
                "Duration_Range_Max": "30",
                "Tone": "Professional"
            }
        ]
    })
}

pub const PATTERNS_CSV: &str = "\u{feff}Pattern_Name,Pattern_Category,Duration_Range_Min,Duration_Range_Max,Slide_Count_Min,Slide_Count_Max,Structure_Format,Tone,Animation_Intensity,Transition_Style,Common_Pitfalls\n\
Workshop Flow,Training Workshop,30,90,20,40,\"Welcome→Agenda→Content→Q&A→Thank You\",\"Educational, Supportive\",Low,Fade,\"Too much text; \"\"Death by bullet\"\"\"\n\
Broken Numbers,Webinar,soon,later,n/a,20,Opening→Content→Closing,Educational,None,Zoom,\n";

pub const AUDIENCES_CSV: &str = "Audience_Name,Key_Characteristics,Attention_Span,Slide_Density\r\n\
Students Trainees,\"Eager, new to the topic\",Short,Low\r\n";
