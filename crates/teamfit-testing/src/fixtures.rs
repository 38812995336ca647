//! Canned backend payloads, byte-for-byte in the shapes the API emits.
//!
//! The `_json` functions return raw wire bodies for the stub server; their
//! typed counterparts parse those same bodies so tests also exercise the
//! deserialization path.

use teamfit_types::{AnalysisDataset, InterviewHistory, InterviewRecord, TranscriptData};

/// Dashboard payload with four candidates, one per known recommendation.
///
/// Scores are distinct (0.92, 0.74, 0.55, 0.31) so sort assertions have an
/// unambiguous expected order. One candidate uses shorthand trait keys.
pub fn dataset_json() -> String {
    r#"{
        "analysis_metadata": {
            "team_size": 5,
            "candidates_count": 4,
            "timestamp": "2024-02-01T09:30:00Z"
        },
        "team_insights": {
            "candidate_pool_summary": {
                "average_compatibility": 0.63,
                "candidates_above_threshold": 2
            }
        },
        "team_summary": {
            "members": [
                {
                    "name": "Maya Torres",
                    "position": "Tech Lead",
                    "traits_summary": {
                        "openness": 0.7,
                        "conscientiousness": 0.85,
                        "extraversion": 0.5,
                        "agreeableness": 0.65,
                        "neuroticism": 0.3
                    }
                },
                {
                    "name": "Ken Adachi",
                    "position": "Senior Engineer",
                    "traits_summary": {
                        "openness": 0.6,
                        "conscientiousness": 0.75,
                        "extraversion": 0.4,
                        "agreeableness": 0.7,
                        "neuroticism": 0.35
                    }
                }
            ]
        },
        "candidates_analysis": [
            {
                "candidate_info": {
                    "id": "cand_01",
                    "name": "Jordan Banks",
                    "position": "Backend Engineer",
                    "personality_traits": {
                        "openness": 0.8,
                        "conscientiousness": 0.9,
                        "extraversion": 0.45,
                        "agreeableness": 0.7,
                        "neuroticism": 0.25
                    }
                },
                "ai_analysis": {
                    "compatibility_score": 0.92,
                    "strengths": [
                        "Deep distributed-systems experience",
                        "Mentors junior engineers well",
                        "Calm under incident pressure"
                    ],
                    "concerns": ["Limited frontend exposure"],
                    "recommendations": ["Pair with the platform team for onboarding"],
                    "summary": "Strong technical and cultural match for the backend group.",
                    "confidence_level": 0.88
                },
                "overall_recommendation": { "status": "HIGHLY RECOMMENDED" }
            },
            {
                "candidate_info": {
                    "id": "cand_02",
                    "name": "Elena Petrova",
                    "position": "Engineering Manager",
                    "personality_traits": {
                        "open": 0.65,
                        "conscientious": 0.8,
                        "extraversion": 0.75,
                        "agreeable": 0.6,
                        "neuroticism": 0.4
                    }
                },
                "ai_analysis": {
                    "compatibility_score": 0.74,
                    "strengths": ["Track record scaling teams", "Clear communicator"],
                    "concerns": ["May be over-levelled for the open role"],
                    "recommendations": ["Discuss scope expectations early"],
                    "summary": "Good fit with some levelling questions to resolve.",
                    "confidence_level": 0.8
                },
                "overall_recommendation": { "status": "RECOMMENDED" }
            },
            {
                "candidate_info": {
                    "id": "cand_03",
                    "name": "Priya Natarajan",
                    "position": "Product Designer",
                    "personality_traits": {
                        "openness": 0.9,
                        "conscientiousness": 0.55,
                        "extraversion": 0.85,
                        "agreeableness": 0.75,
                        "neuroticism": 0.5
                    }
                },
                "ai_analysis": {
                    "compatibility_score": 0.55,
                    "strengths": ["Outstanding portfolio", "User-research background"],
                    "concerns": [
                        "No prior experience with design systems",
                        "Team currently lacks design mentorship"
                    ],
                    "recommendations": ["Consider after a design-system hire lands"],
                    "summary": "Promising, but timing and support structure are a concern.",
                    "confidence_level": 0.7
                },
                "overall_recommendation": { "status": "CONDITIONALLY RECOMMENDED" }
            },
            {
                "candidate_info": {
                    "id": "cand_04",
                    "name": "Tom Oduya",
                    "position": "Data Analyst",
                    "personality_traits": {
                        "openness": 0.4,
                        "conscientiousness": 0.5,
                        "extraversion": 0.3,
                        "agreeableness": 0.45,
                        "neuroticism": 0.7
                    }
                },
                "ai_analysis": {
                    "compatibility_score": 0.31,
                    "strengths": ["Solid SQL fundamentals"],
                    "concerns": [
                        "Role requires stakeholder-facing work",
                        "Low collaboration signals in the interview"
                    ],
                    "recommendations": ["Better suited to a pure reporting role"],
                    "summary": "Mismatch with the collaborative shape of this role.",
                    "confidence_level": 0.85
                },
                "overall_recommendation": { "status": "NOT RECOMMENDED" }
            }
        ]
    }"#
    .to_string()
}

pub fn dataset() -> AnalysisDataset {
    serde_json::from_str(&dataset_json()).expect("fixture dataset must parse")
}

/// History payload in the `{"interviews": [...]}` wire wrapper.
pub fn history_json() -> String {
    r#"{
        "interviews": [
            {
                "agent_id": "agent_101",
                "candidate_name": "Jordan Banks",
                "role": "Backend Engineer",
                "status": "completed",
                "created_at": "2024-01-29T15:00:00Z",
                "duration": "27 minutes",
                "has_transcript": true
            },
            {
                "agent_id": "agent_102",
                "candidate_name": "Elena Petrova",
                "role": "Engineering Manager",
                "status": "completed",
                "created_at": "2024-01-30T11:30:00Z",
                "duration": "35 minutes",
                "has_transcript": true
            },
            {
                "agent_id": "agent_103",
                "candidate_name": "Priya Natarajan",
                "role": "Product Designer",
                "status": "in-progress",
                "created_at": "2024-02-01T08:45:00Z",
                "duration": "In progress",
                "has_transcript": false
            }
        ]
    }"#
    .to_string()
}

pub fn history() -> Vec<InterviewRecord> {
    let wrapper: InterviewHistory =
        serde_json::from_str(&history_json()).expect("fixture history must parse");
    wrapper.interviews
}

/// Message-style transcript for agent_101.
pub fn transcript_json() -> String {
    r#"{
        "success": true,
        "agent_id": "agent_101",
        "messages": [
            {
                "role": "assistant",
                "content": "Welcome Jordan, tell me about a system you scaled.",
                "timestamp": "2024-01-29T15:01:12Z"
            },
            {
                "role": "user",
                "content": "I led the sharding of our billing database.",
                "timestamp": "2024-01-29T15:02:05Z"
            },
            {
                "role": "assistant",
                "content": "What was the hardest trade-off in that migration?",
                "timestamp": "2024-01-29T15:02:40Z"
            }
        ],
        "message_count": 3
    }"#
    .to_string()
}

pub fn transcript() -> TranscriptData {
    serde_json::from_str(&transcript_json()).expect("fixture transcript must parse")
}

/// Q&A-style transcript: no `messages`, conversation regrouped per candidate.
pub fn qa_transcript_json() -> String {
    r#"{
        "success": true,
        "agent_id": "agent_102",
        "formatted_transcript": {
            "candidate": {
                "id": "cand_02",
                "name": "Elena Petrova",
                "position": "Engineering Manager",
                "responses": [
                    {
                        "question": "How do you split a 12-person team?",
                        "answer": "Around ownership boundaries, not headcount."
                    },
                    {
                        "question": "How do you handle underperformance?",
                        "answer": "Early, privately, and with a written plan."
                    }
                ]
            }
        }
    }"#
    .to_string()
}

/// Successful create-interview response.
pub fn session_json() -> String {
    r#"{
        "agent_id": "agent_201",
        "candidate_name": "Sam Carter",
        "role": "Platform Engineer",
        "interview_link": "https://agent.ai-interviewer.com/agent_201"
    }"#
    .to_string()
}
