use crate::common::token::tokens;

tokens! {
    /// A language tag, as used by Accept-Language and Content-Language. Unknown tags are kept
    /// in their received casing.
    pub enum Language {
        /// Afrikaans
        (Af, "af");
        /// Afrikaans (South Africa)
        (AfZa, "af-ZA");
        /// Arabic
        (Ar, "ar");
        /// Arabic (U.A.E.)
        (ArAe, "ar-AE");
        /// Arabic (Bahrain)
        (ArBh, "ar-BH");
        /// Arabic (Algeria)
        (ArDz, "ar-DZ");
        /// Arabic (Egypt)
        (ArEg, "ar-EG");
        /// Arabic (Iraq)
        (ArIq, "ar-IQ");
        /// Arabic (Jordan)
        (ArJo, "ar-JO");
        /// Arabic (Kuwait)
        (ArKw, "ar-KW");
        /// Arabic (Lebanon)
        (ArLb, "ar-LB");
        /// Arabic (Libya)
        (ArLy, "ar-LY");
        /// Arabic (Morocco)
        (ArMa, "ar-MA");
        /// Arabic (Oman)
        (ArOm, "ar-OM");
        /// Arabic (Qatar)
        (ArQa, "ar-QA");
        /// Arabic (Saudi Arabia)
        (ArSa, "ar-SA");
        /// Arabic (Syria)
        (ArSy, "ar-SY");
        /// Arabic (Tunisia)
        (ArTn, "ar-TN");
        /// Arabic (Yemen)
        (ArYe, "ar-YE");
        /// Azeri (Latin)
        (Az, "az");
        /// Azeri (Azerbaijan)
        (AzAz, "az-AZ");
        /// Belarusian
        (Be, "be");
        /// Belarusian (Belarus)
        (BeBy, "be-BY");
        /// Bulgarian
        (Bg, "bg");
        /// Bulgarian (Bulgaria)
        (BgBg, "bg-BG");
        /// Bosnian (Bosnia and Herzegovina)
        (BsBa, "bs-BA");
        /// Catalan
        (Ca, "ca");
        /// Catalan (Spain)
        (CaEs, "ca-ES");
        /// Czech
        (Cs, "cs");
        /// Czech (Czech Republic)
        (CsCz, "cs-CZ");
        /// Welsh
        (Cy, "cy");
        /// Welsh (United Kingdom)
        (CyGb, "cy-GB");
        /// Danish
        (Da, "da");
        /// Danish (Denmark)
        (DaDk, "da-DK");
        /// German
        (De, "de");
        /// German (Austria)
        (DeAt, "de-AT");
        /// German (Switzerland)
        (DeCh, "de-CH");
        /// German (Germany)
        (DeDe, "de-DE");
        /// German (Liechtenstein)
        (DeLi, "de-LI");
        /// German (Luxembourg)
        (DeLu, "de-LU");
        /// Divehi
        (Dv, "dv");
        /// Divehi (Maldives)
        (DvMv, "dv-MV");
        /// Greek
        (El, "el");
        /// Greek (Greece)
        (ElGr, "el-GR");
        /// English
        (En, "en");
        /// English (Australia)
        (EnAu, "en-AU");
        /// English (Belize)
        (EnBz, "en-BZ");
        /// English (Canada)
        (EnCa, "en-CA");
        /// English (Caribbean)
        (EnCb, "en-CB");
        /// English (United Kingdom)
        (EnGb, "en-GB");
        /// English (Ireland)
        (EnIe, "en-IE");
        /// English (Jamaica)
        (EnJm, "en-JM");
        /// English (New Zealand)
        (EnNz, "en-NZ");
        /// English (Republic of the Philippines)
        (EnPh, "en-PH");
        /// English (Trinidad and Tobago)
        (EnTt, "en-TT");
        /// English (United States)
        (EnUs, "en-US");
        /// English (South Africa)
        (EnZa, "en-ZA");
        /// English (Zimbabwe)
        (EnZw, "en-ZW");
        /// Esperanto
        (Eo, "eo");
        /// Spanish
        (Es, "es");
        /// Spanish (Argentina)
        (EsAr, "es-AR");
        /// Spanish (Bolivia)
        (EsBo, "es-BO");
        /// Spanish (Chile)
        (EsCl, "es-CL");
        /// Spanish (Colombia)
        (EsCo, "es-CO");
        /// Spanish (Costa Rica)
        (EsCr, "es-CR");
        /// Spanish (Dominican Republic)
        (EsDo, "es-DO");
        /// Spanish (Ecuador)
        (EsEc, "es-EC");
        /// Spanish (Castilian, Spain)
        (EsEs, "es-ES");
        /// Spanish (Guatemala)
        (EsGt, "es-GT");
        /// Spanish (Honduras)
        (EsHn, "es-HN");
        /// Spanish (Mexico)
        (EsMx, "es-MX");
        /// Spanish (Nicaragua)
        (EsNi, "es-NI");
        /// Spanish (Panama)
        (EsPa, "es-PA");
        /// Spanish (Peru)
        (EsPe, "es-PE");
        /// Spanish (Puerto Rico)
        (EsPr, "es-PR");
        /// Spanish (Paraguay)
        (EsPy, "es-PY");
        /// Spanish (El Salvador)
        (EsSv, "es-SV");
        /// Spanish (Uruguay)
        (EsUy, "es-UY");
        /// Spanish (Venezuela)
        (EsVe, "es-VE");
        /// Estonian
        (Et, "et");
        /// Estonian (Estonia)
        (EtEe, "et-EE");
        /// Basque
        (Eu, "eu");
        /// Basque (Spain)
        (EuEs, "eu-ES");
        /// Farsi
        (Fa, "fa");
        /// Farsi (Iran)
        (FaIr, "fa-IR");
        /// Finnish
        (Fi, "fi");
        /// Finnish (Finland)
        (FiFi, "fi-FI");
        /// Faroese
        (Fo, "fo");
        /// Faroese (Faroe Islands)
        (FoFo, "fo-FO");
        /// French
        (Fr, "fr");
        /// French (Belgium)
        (FrBe, "fr-BE");
        /// French (Canada)
        (FrCa, "fr-CA");
        /// French (Switzerland)
        (FrCh, "fr-CH");
        /// French (France)
        (FrFr, "fr-FR");
        /// French (Luxembourg)
        (FrLu, "fr-LU");
        /// French (Principality of Monaco)
        (FrMc, "fr-MC");
        /// Galician
        (Gl, "gl");
        /// Galician (Spain)
        (GlEs, "gl-ES");
        /// Gujarati
        (Gu, "gu");
        /// Gujarati (India)
        (GuIn, "gu-IN");
        /// Hebrew
        (He, "he");
        /// Hebrew (Israel)
        (HeIl, "he-IL");
        /// Hindi
        (Hi, "hi");
        /// Hindi (India)
        (HiIn, "hi-IN");
        /// Croatian
        (Hr, "hr");
        /// Croatian (Bosnia and Herzegovina)
        (HrBa, "hr-BA");
        /// Croatian (Croatia)
        (HrHr, "hr-HR");
        /// Hungarian
        (Hu, "hu");
        /// Hungarian (Hungary)
        (HuHu, "hu-HU");
        /// Armenian
        (Hy, "hy");
        /// Armenian (Armenia)
        (HyAm, "hy-AM");
        /// Indonesian
        (Id, "id");
        /// Indonesian (Indonesia)
        (IdId, "id-ID");
        /// Icelandic (Iceland)
        (IsIs, "is-IS");
        /// Italian
        (It, "it");
        /// Italian (Switzerland)
        (ItCh, "it-CH");
        /// Italian (Italy)
        (ItIt, "it-IT");
        /// Japanese
        (Ja, "ja");
        /// Japanese (Japan)
        (JaJp, "ja-JP");
        /// Georgian
        (Ka, "ka");
        /// Georgian (Georgia)
        (KaGe, "ka-GE");
        /// Kazakh
        (Kk, "kk");
        /// Kazakh (Kazakhstan)
        (KkKz, "kk-KZ");
        /// Kannada
        (Kn, "kn");
        /// Kannada (India)
        (KnIn, "kn-IN");
        /// Korean
        (Ko, "ko");
        /// Korean (Korea)
        (KoKr, "ko-KR");
        /// Konkani
        (Kok, "kok");
        /// Konkani (India)
        (KokIn, "kok-IN");
        /// Kyrgyz
        (Ky, "ky");
        /// Kyrgyz (Kyrgyzstan)
        (KyKg, "ky-KG");
        /// Lithuanian
        (Lt, "lt");
        /// Lithuanian (Lithuania)
        (LtLt, "lt-LT");
        /// Latvian
        (Lv, "lv");
        /// Latvian (Latvia)
        (LvLv, "lv-LV");
        /// Maori
        (Mi, "mi");
        /// Maori (New Zealand)
        (MiNz, "mi-NZ");
        /// FYRO Macedonian
        (Mk, "mk");
        /// FYRO Macedonian (Former Yugoslav Republic of Macedonia)
        (MkMk, "mk-MK");
        /// Mongolian
        (Mn, "mn");
        /// Mongolian (Mongolia)
        (MnMn, "mn-MN");
        /// Marathi
        (Mr, "mr");
        /// Marathi (India)
        (MrIn, "mr-IN");
        /// Malay
        (Ms, "ms");
        /// Malay (Brunei Darussalam)
        (MsBn, "ms-BN");
        /// Malay (Malaysia)
        (MsMy, "ms-MY");
        /// Maltese
        (Mt, "mt");
        /// Maltese (Malta)
        (MtMt, "mt-MT");
        /// Norwegian (Bokm?l)
        (Nb, "nb");
        /// Norwegian (Bokm?l) (Norway)
        (NbNo, "nb-NO");
        /// Dutch
        (Nl, "nl");
        /// Dutch (Belgium)
        (NlBe, "nl-BE");
        /// Dutch (Netherlands)
        (NlNl, "nl-NL");
        /// Norwegian (Nynorsk) (Norway)
        (NnNo, "nn-NO");
        /// Northern Sotho
        (Ns, "ns");
        /// Northern Sotho (South Africa)
        (NsZa, "ns-ZA");
        /// Punjabi
        (Pa, "pa");
        /// Punjabi (India)
        (PaIn, "pa-IN");
        /// Polish
        (Pl, "pl");
        /// Polish (Poland)
        (PlPl, "pl-PL");
        /// Pashto
        (Ps, "ps");
        /// Pashto (Afghanistan)
        (PsAr, "ps-AR");
        /// Portuguese
        (Pt, "pt");
        /// Portuguese (Brazil)
        (PtBr, "pt-BR");
        /// Portuguese (Portugal)
        (PtPt, "pt-PT");
        /// Quechua
        (Qu, "qu");
        /// Quechua (Bolivia)
        (QuBo, "qu-BO");
        /// Quechua (Ecuador)
        (QuEc, "qu-EC");
        /// Quechua (Peru)
        (QuPe, "qu-PE");
        /// Romanian
        (Ro, "ro");
        /// Romanian (Romania)
        (RoRo, "ro-RO");
        /// Russian
        (Ru, "ru");
        /// Russian (Russia)
        (RuRu, "ru-RU");
        /// Sanskrit
        (Sa, "sa");
        /// Sanskrit (India)
        (SaIn, "sa-IN");
        /// Sami (Northern)
        (Se, "se");
        /// Sami (Finland)
        (SeFi, "se-FI");
        /// Sami (Norway)
        (SeNo, "se-NO");
        /// Sami (Sweden)
        (SeSe, "se-SE");
        /// Slovak
        (Sk, "sk");
        /// Slovak (Slovakia)
        (SkSk, "sk-SK");
        /// Slovenian
        (Sl, "sl");
        /// Slovenian (Slovenia)
        (SlSi, "sl-SI");
        /// Albanian
        (Sq, "sq");
        /// Albanian (Albania)
        (SqAl, "sq-AL");
        /// Serbian (Bosnia and Herzegovina)
        (SrBa, "sr-BA");
        /// Serbian (Serbia and Montenegro)
        (SrSp, "sr-SP");
        /// Swedish
        (Sv, "sv");
        /// Swedish (Finland)
        (SvFi, "sv-FI");
        /// Swedish (Sweden)
        (SvSe, "sv-SE");
        /// Swahili
        (Sw, "sw");
        /// Swahili (Kenya)
        (SwKe, "sw-KE");
        /// Syriac
        (Syr, "syr");
        /// Syriac (Syria)
        (SyrSy, "syr-SY");
        /// Tamil
        (Ta, "ta");
        /// Tamil (India)
        (TaIn, "ta-IN");
        /// Telugu
        (Te, "te");
        /// Telugu (India)
        (TeIn, "te-IN");
        /// Thai
        (Th, "th");
        /// Thai (Thailand)
        (ThTh, "th-TH");
        /// Tagalog
        (Tl, "tl");
        /// Tagalog (Philippines)
        (TlPh, "tl-PH");
        /// Tswana
        (Tn, "tn");
        /// Tswana (South Africa)
        (TnZa, "tn-ZA");
        /// Turkish
        (Tr, "tr");
        /// Turkish (Turkey)
        (TrTr, "tr-TR");
        /// Tatar
        (Tt, "tt");
        /// Tatar (Russia)
        (TtRu, "tt-RU");
        /// Tsonga
        (Ts, "ts");
        /// Ukrainian
        (Uk, "uk");
        /// Ukrainian (Ukraine)
        (UkUa, "uk-UA");
        /// Urdu
        (Ur, "ur");
        /// Urdu (Islamic Republic of Pakistan)
        (UrPk, "ur-PK");
        /// Uzbek (Latin)
        (Uz, "uz");
        /// Uzbek (Uzbekistan)
        (UzUz, "uz-UZ");
        /// Vietnamese
        (Vi, "vi");
        /// Vietnamese (Viet Nam)
        (ViVn, "vi-VN");
        /// Xhosa
        (Xh, "xh");
        /// Xhosa (South Africa)
        (XhZa, "xh-ZA");
        /// Chinese
        (Zh, "zh");
        /// Chinese (S)
        (ZhCn, "zh-CN");
        /// Chinese (Hong Kong)
        (ZhHk, "zh-HK");
        /// Chinese (Macau)
        (ZhMo, "zh-MO");
        /// Chinese (Singapore)
        (ZhSg, "zh-SG");
        /// Chinese (T)
        (ZhTw, "zh-TW");
        /// Zulu
        (Zu, "zu");
        /// Zulu (South Africa)
        (ZuZa, "zu-ZA");
        /// Any language.
        (Any, "*");
    }
}
