//! Built-in disease table

use health_agent_core::{DiseaseId, Language};

use crate::record::DiseaseRecord;

const MALARIA_SYMPTOMS_EN: &str = r#"🦟 MALARIA SYMPTOMS (मलेरिया के लक्षण):
• High fever (101-104°F) with chills / तेज़ बुखार ठंड के साथ
• Severe headache and body aches / गंभीर सिरदर्द और शरीर में दर्द
• Nausea, vomiting, diarrhea / जी मिचलाना, उल्टी, दस्त
• Sweating and extreme fatigue / पसीना और अत्यधिक थकान
• Abdominal pain / पेट में दर्द
• Muscle pain / मांसपेशियों में दर्द

⚠️ URGENT: Visit doctor immediately if fever persists >24 hours!
🏥 Emergency: Call 102 (Medical Emergency)

मलेरिया का तुरंत इलाज जरूरी है! डॉक्टर से संपर्क करें।"#;

const DENGUE_SYMPTOMS_EN: &str = r#"🦟 DENGUE SYMPTOMS (डेंगू के लक्षण):
• Sudden high fever (104°F) for 2-7 days / अचानक तेज़ बुखार 2-7 दिन
• Severe frontal headache / तेज़ सिरदर्द (माथे में)
• Pain behind eyes (retro-orbital) / आंखों के पीछे दर्द
• Severe muscle and joint pain / मांसपेशियों और जोड़ों में तेज़ दर्द
• Skin rash (appears 3-5 days) / त्वचा पर दाने (3-5 दिन बाद)
• Nausea and vomiting / जी मिचलाना और उल्टी
• Easy bruising and bleeding / आसानी से नील पड़ना

⚠️ DANGER SIGNS: Persistent vomiting, severe abdominal pain, rapid breathing
🏥 Emergency: 102 | Platelet count monitoring essential

चेतावनी: लगातार उल्टी, पेट में तेज़ दर्द हो तो तुरंत अस्पताल जाएं!"#;

const COVID_SYMPTOMS_EN: &str = r#"😷 COVID-19 SYMPTOMS (कोविड-19 के लक्षण):
• Fever or chills / बुखार या ठंड लगना
• Dry cough (persistent) / सूखी खांसी (लगातार)
• Shortness of breath / सांस लेने में कठिनाई
• Extreme fatigue / अत्यधिक थकान
• Loss of taste or smell / स्वाद या गंध का चले जाना
• Sore throat / गले में खराश
• Body aches / शरीर में दर्द
• Headache / सिरदर्द
• Nausea or vomiting / जी मिचलाना या उल्टी

⚠️ EMERGENCY: Difficulty breathing, chest pain, bluish lips
🏥 Helpline: 1075 | Get tested immediately
😷 Isolate yourself and wear mask

आपातकाल: सांस लेने में तकलीफ हो तो तुरंत अस्पताल जाएं!"#;

const TYPHOID_SYMPTOMS_EN: &str = r#"🦠 TYPHOID SYMPTOMS (टाइफाइड के लक्षण):
• Prolonged fever (102-104°F) for weeks / कई हफ्तों तक बुखार
• Severe headache / तेज़ सिरदर्द
• Weakness and fatigue / कमजोरी और थकान
• Stomach pain / पेट में दर्द
• Constipation or diarrhea / कब्ज़ या दस्त
• Loss of appetite / भूख न लगना
• Rose-colored rash on chest / छाती पर गुलाबी रंग के धब्बे
• Weight loss / वजन कम होना

⚠️ CRITICAL: Typhoid needs immediate antibiotic treatment
🏥 Emergency: 102 | Blood test required for confirmation
💊 Complete antibiotic course essential

टाइफाइड का तुरंत इलाज जरूरी है! एंटीबायोटिक का पूरा कोर्स लें।"#;

const MALARIA_SYMPTOMS_HI: &str = r#"🦟 मलेरिया के लक्षण:
• तेज़ बुखार (101-104°F) ठंड के साथ
• गंभीर सिरदर्द और शरीर में दर्द
• जी मिचलाना, उल्टी, दस्त
• पसीना और थकान
• पेट में दर्द
• मांसपेशियों में दर्द

⚠️ तुरंत डॉक्टर से संपर्क करें!"#;

const DENGUE_SYMPTOMS_HI: &str = r#"🦟 डेंगू के लक्षण:
• तेज़ बुखार (104°F) 3-7 दिन तक
• गंभीर सिरदर्द (माथे में दर्द)
• आंखों के पीछे दर्द
• मांसपेशियों और जोड़ों में दर्द
• त्वचा पर दाने (बुखार के 3-5 दिन बाद)
• जी मिचलाना और उल्टी
• आसानी से नील पड़ना

⚠️ चेतावनी के संकेत: लगातार उल्टी, पेट में तेज़ दर्द"#;

const COVID_SYMPTOMS_HI: &str = r#"😷 कोविड-19 के लक्षण:
• बुखार या ठंड लगना
• सूखी खांसी
• सांस लेने में कठिनाई
• थकान
• शरीर में दर्द
• स्वाद या गंध का चले जाना
• गले में खराश
• नाक बंद या बहना
• जी मिचलाना या उल्टी
• दस्त

⚠️ आपातकालीन संकेत: सांस लेने में तकलीफ, सीने में दर्द"#;

const TYPHOID_SYMPTOMS_HI: &str = r#"🦠 टाइफाइड के लक्षण:
• लंबे समय तक बुखार (102-104°F)
• तेज़ सिरदर्द
• कमजोरी और पेट दर्द
• कब्ज या दस्त
• छाती पर गुलाबी रंग के धब्बे
• भूख न लगना

⚠️ टाइफाइड का तुरंत इलाज जरूरी!"#;

const MALARIA_PREVENTION: &str = r#"🛡️ MALARIA PREVENTION (मलेरिया से बचाव):

🏠 HOME PROTECTION / घर की सुरक्षा:
• Use mosquito nets (treated with insecticide) / मच्छरदानी का उपयोग
• Install window/door screens / खिड़की-दरवाजों पर जाली
• Use mosquito repellent (evening time) / शाम को मच्छर भगाने वाली दवा
• Wear long-sleeved clothes after sunset / शाम के बाद पूरे कपड़े

🌊 ELIMINATE BREEDING SITES / प्रजनन स्थल हटाएं:
• Remove stagnant water from containers / बर्तनों से रुका पानी हटाएं  
• Clean water tanks weekly / पानी की टंकी साफ करें
• Cover water storage properly / पानी के कंटेनर ढकें
• Clean surroundings / आस-पास सफाई रखें

💊 MEDICAL PREVENTION / चिकित्सा बचाव:
• Antimalarial tablets if traveling to high-risk areas
• Consult doctor for prophylaxis / डॉक्टर से सलाह लें

🏥 Government Program: Free bed nets available at PHC"#;

const DENGUE_PREVENTION: &str = r#"🛡️ DENGUE PREVENTION (डेंगू से बचाव):

🦟 AEDES MOSQUITO CONTROL / एडीज मच्छर नियंत्रण:
• Remove ALL stagnant water / सारा रुका हुआ पानी हटाएं
• Change water in coolers/vases weekly / कूलर/फूलदान का पानी बदलें
• Cover all water containers tightly / सभी पानी के बर्तन ढकें
• Clean roof gutters regularly / छत की नालियां साफ करें

⏰ TIME-BASED PROTECTION / समय के अनुसार बचाव:
• Aedes mosquitoes bite during daytime / दिन में काटने वाले मच्छर
• Use repellent during day hours / दिन में मच्छर भगाने वाली दवा
• Wear full sleeves 6AM-6PM / सुबह-शाम पूरे कपड़े पहनें

🏘️ COMMUNITY ACTION / सामुदायिक कार्रवाई:
• Report breeding sites to authorities / अधिकारियों को सूचित करें
• Participate in cleaning drives / सफाई अभियान में भाग लें
• Educate neighbors / पड़ोसियों को जागरूक करें

🏥 Government Program: Free fogging in affected areas"#;

const COVID_PREVENTION: &str = r#"🛡️ COVID-19 PREVENTION (कोविड-19 से बचाव):

😷 PERSONAL PROTECTION / व्यक्तिगत सुरक्षा:
• Wear well-fitted masks in public places / सार्वजनिक स्थानों पर मास्क
• Maintain 6 feet physical distance / 6 फीट की दूरी बनाए रखें
• Avoid crowded places / भीड़-भाड़ वाली जगह न जाएं
• Stay home when feeling unwell / बीमार महसूस करें तो घर रहें

🧼 HYGIENE PRACTICES / स्वच्छता की आदतें:
• Wash hands for 20 seconds frequently / 20 सेकंड तक हाथ धोएं
• Use alcohol-based sanitizer (60%+) / एल्कोहल आधारित सैनिटाइजर
• Don't touch face with unwashed hands / गंदे हाथों से चेहरा न छुएं
• Clean surfaces regularly / सतहों को नियमित साफ करें

💉 VACCINATION / टीकाकरण:
• Get fully vaccinated (both doses) / दोनों डोज़ का टीका लगवाएं
• Take booster dose when eligible / बूस्टर डोज़ भी लगवाएं
• Vaccination is FREE at government centers / सरकारी केंद्रों में मुफ्त

🏥 Government Program: Free vaccination at all PHCs"#;

/// Records in corpus order
pub(crate) fn records() -> Vec<DiseaseRecord> {
    vec![
        DiseaseRecord::new(DiseaseId::Malaria, 0.95)
            .with_keywords(
                Language::English,
                &[
                    "fever", "chills", "headache", "nausea", "vomiting", "sweating", "fatigue",
                    "body aches",
                ],
            )
            .with_keywords(
                Language::Hindi,
                &["बुखार", "ठंड", "सिरदर्द", "जी मिचलाना", "उल्टी", "पसीना", "थकान", "दर्द"],
            )
            .with_symptoms(Language::English, MALARIA_SYMPTOMS_EN)
            .with_symptoms(Language::Hindi, MALARIA_SYMPTOMS_HI)
            .with_prevention(MALARIA_PREVENTION),
        DiseaseRecord::new(DiseaseId::Dengue, 0.94)
            .with_keywords(
                Language::English,
                &[
                    "high fever", "severe headache", "eye pain", "muscle pain", "joint pain",
                    "rash", "bleeding",
                ],
            )
            .with_symptoms(Language::English, DENGUE_SYMPTOMS_EN)
            .with_symptoms(Language::Hindi, DENGUE_SYMPTOMS_HI)
            .with_prevention(DENGUE_PREVENTION),
        DiseaseRecord::new(DiseaseId::Covid, 0.96)
            .with_keywords(
                Language::English,
                &[
                    "fever", "cough", "breathing difficulty", "fatigue", "loss of taste",
                    "loss of smell", "sore throat",
                ],
            )
            .with_symptoms(Language::English, COVID_SYMPTOMS_EN)
            .with_symptoms(Language::Hindi, COVID_SYMPTOMS_HI)
            .with_prevention(COVID_PREVENTION),
        DiseaseRecord::new(DiseaseId::Typhoid, 0.92)
            .with_keywords(
                Language::English,
                &[
                    "prolonged fever", "headache", "weakness", "stomach pain", "constipation",
                    "diarrhea", "loss of appetite",
                ],
            )
            .with_symptoms(Language::English, TYPHOID_SYMPTOMS_EN)
            .with_symptoms(Language::Hindi, TYPHOID_SYMPTOMS_HI),
    ]
}
